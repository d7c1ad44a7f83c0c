//! Structured report content for external renderers.
//!
//! The crate owns what goes into a cost report, not how it is drawn:
//! a [`Report`] is plain serializable data a PDF or HTML renderer
//! consumes as-is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{CostMetric, Optimization, Resource, ServiceCost};

/// Resource rows included in a report, most expensive first.
pub const TOP_RESOURCE_LIMIT: usize = 5;

const DEFAULT_TITLE: &str = "Cloud Cost Analysis Report";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub generated_on: NaiveDate,
    pub metrics: Vec<CostMetric>,
    pub service_breakdown: Vec<ServiceCost>,
    pub top_resources: Vec<Resource>,
    pub optimizations: Vec<Optimization>,
}

#[derive(Debug, Clone)]
pub struct ReportBuilder {
    title: String,
    generated_on: NaiveDate,
    metrics: Vec<CostMetric>,
    service_breakdown: Vec<ServiceCost>,
    resources: Vec<Resource>,
    optimizations: Vec<Optimization>,
}

impl ReportBuilder {
    /// The generation date is injected so report assembly stays a pure
    /// function of its inputs.
    pub fn new(generated_on: NaiveDate) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            generated_on,
            metrics: Vec::new(),
            service_breakdown: Vec::new(),
            resources: Vec::new(),
            optimizations: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn metrics(mut self, metrics: Vec<CostMetric>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn service_breakdown(mut self, breakdown: Vec<ServiceCost>) -> Self {
        self.service_breakdown = breakdown;
        self
    }

    pub fn resources(mut self, resources: Vec<Resource>) -> Self {
        self.resources = resources;
        self
    }

    pub fn optimizations(mut self, optimizations: Vec<Optimization>) -> Self {
        self.optimizations = optimizations;
        self
    }

    /// Assembles the report, keeping only the [`TOP_RESOURCE_LIMIT`] most
    /// expensive resources.
    pub fn build(self) -> Report {
        let mut top_resources = self.resources;
        top_resources.sort_by(|a, b| {
            b.cost
                .partial_cmp(&a.cost)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        top_resources.truncate(TOP_RESOURCE_LIMIT);

        Report {
            title: self.title,
            generated_on: self.generated_on,
            metrics: self.metrics,
            service_breakdown: self.service_breakdown,
            top_resources,
            optimizations: self.optimizations,
        }
    }
}
