use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated cost observation.
///
/// Histories handed to the forecaster must be ordered by date ascending.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostPoint {
    pub date: NaiveDate,
    pub cost: f64,
}

impl CostPoint {
    pub fn new(date: NaiveDate, cost: f64) -> Self {
        Self { date, cost }
    }
}

/// Cost attributed to one service, with its share of the total.
///
/// Percentages across a breakdown should sum to roughly 100; this is not
/// enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCost {
    pub name: String,
    pub cost: f64,
    pub percentage: f64,
}

impl ServiceCost {
    pub fn new(name: impl Into<String>, cost: f64, percentage: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            percentage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

/// A headline dashboard figure with its period-over-period change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostMetric {
    pub label: String,
    pub value: String,
    pub change: f64,
    pub trend: TrendDirection,
}
