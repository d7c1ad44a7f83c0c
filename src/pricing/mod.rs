//! Provider rate cards and multi-cloud workload comparison.

mod table;

pub use table::{PricingTable, PricingTableBuilder, global_pricing_table};

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Per-unit rates for one cloud provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderPricing {
    pub provider: String,
    pub compute_per_hour: f64,
    pub storage_per_gb: f64,
    pub egress_per_gb: f64,
}

impl ProviderPricing {
    pub fn new(
        provider: impl Into<String>,
        compute_per_hour: f64,
        storage_per_gb: f64,
        egress_per_gb: f64,
    ) -> Self {
        Self {
            provider: provider.into(),
            compute_per_hour,
            storage_per_gb,
            egress_per_gb,
        }
    }

    pub fn compute_cost(&self, workload: &Workload) -> f64 {
        self.compute_per_hour * workload.compute_hours
    }

    pub fn storage_cost(&self, workload: &Workload) -> f64 {
        self.storage_per_gb * workload.storage_gb
    }

    pub fn egress_cost(&self, workload: &Workload) -> f64 {
        self.egress_per_gb * workload.egress_gb
    }

    /// Total monthly cost of the workload at these rates.
    pub fn monthly_cost(&self, workload: &Workload) -> f64 {
        self.compute_cost(workload) + self.storage_cost(workload) + self.egress_cost(workload)
    }
}

/// Fixed resource-consumption profile used to compare providers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    pub compute_hours: f64,
    pub storage_gb: f64,
    pub egress_gb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderCost {
    pub provider: String,
    pub total_cost: f64,
}

/// Prices the workload at every provider, preserving input order.
pub fn compare_providers(providers: &[ProviderPricing], workload: &Workload) -> Vec<ProviderCost> {
    providers
        .iter()
        .map(|pricing| ProviderCost {
            provider: pricing.provider.clone(),
            total_cost: pricing.monthly_cost(workload),
        })
        .collect()
}

/// Provider with the lowest total cost; the first in input order wins
/// ties.
pub fn cheapest<'a>(
    providers: &'a [ProviderPricing],
    workload: &Workload,
) -> Result<&'a ProviderPricing> {
    providers
        .iter()
        .min_by(|a, b| {
            a.monthly_cost(workload)
                .partial_cmp(&b.monthly_cost(workload))
                .unwrap_or(Ordering::Equal)
        })
        .ok_or(Error::InsufficientData {
            required: 1,
            actual: 0,
        })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MigrationSavings {
    pub cheapest_provider: String,
    pub amount: f64,
    pub percent: f64,
}

/// Savings available by migrating from the current provider to the
/// cheapest one. Reports zero, never a negative amount, when the current
/// provider is already the cheapest.
pub fn savings_vs_cheapest(
    current_provider: &str,
    providers: &[ProviderPricing],
    workload: &Workload,
) -> Result<MigrationSavings> {
    let current = providers
        .iter()
        .find(|pricing| pricing.provider == current_provider)
        .ok_or_else(|| Error::invalid_config(format!("unknown provider: {current_provider}")))?;
    let best = cheapest(providers, workload)?;

    let current_cost = current.monthly_cost(workload);
    if current_cost == 0.0 {
        return Err(Error::DivisionByZero("current provider cost"));
    }
    let amount = (current_cost - best.monthly_cost(workload)).max(0.0);

    Ok(MigrationSavings {
        cheapest_provider: best.provider.clone(),
        amount,
        percent: amount / current_cost * 100.0,
    })
}
