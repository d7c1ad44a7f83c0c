use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A recommended cost-saving action with its estimated monthly savings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Optimization {
    pub id: String,
    pub title: String,
    pub description: String,
    pub potential_savings: f64,
    pub priority: Priority,
    pub category: String,
}

/// A selectable what-if savings action. Selection state lives with the
/// caller, not the entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsOption {
    pub id: String,
    pub title: String,
    pub description: String,
    pub savings: f64,
}

impl SavingsOption {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        savings: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            savings,
        }
    }
}
