//! Monthly budget configuration and overspend projection.

mod outlook;

pub use outlook::{BudgetOutlook, SpendWindow, evaluate_budget};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A monthly budget line. The amount must be positive; usage percentages
/// divide by it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetConfig {
    monthly_budget: f64,
}

impl BudgetConfig {
    pub fn new(monthly_budget: f64) -> Result<Self> {
        if monthly_budget.is_nan() || monthly_budget <= 0.0 {
            return Err(Error::invalid_config(format!(
                "monthly budget must be positive, got {monthly_budget}"
            )));
        }
        Ok(Self { monthly_budget })
    }

    pub fn monthly_budget(&self) -> f64 {
        self.monthly_budget
    }

    /// Classifies spend against the budget line.
    pub fn check(&self, current_spend: f64) -> BudgetStatus {
        if current_spend >= self.monthly_budget {
            BudgetStatus::Exceeded {
                used: current_spend,
                limit: self.monthly_budget,
                overage: current_spend - self.monthly_budget,
            }
        } else {
            BudgetStatus::WithinBudget {
                used: current_spend,
                limit: self.monthly_budget,
                remaining: self.monthly_budget - current_spend,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BudgetStatus {
    WithinBudget {
        used: f64,
        limit: f64,
        remaining: f64,
    },
    Exceeded {
        used: f64,
        limit: f64,
        overage: f64,
    },
}

impl BudgetStatus {
    pub fn is_exceeded(&self) -> bool {
        matches!(self, Self::Exceeded { .. })
    }

    pub fn used(&self) -> f64 {
        match self {
            Self::WithinBudget { used, .. } => *used,
            Self::Exceeded { used, .. } => *used,
        }
    }
}
