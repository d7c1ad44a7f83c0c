use serde::{Deserialize, Serialize};

/// Lifecycle state of a billed resource. Caller-supplied, never derived
/// from utilization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Active,
    Idle,
    Underutilized,
}

/// A single billed cloud resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub service: String,
    pub region: String,
    pub cost: f64,
    /// Utilization percentage in 0-100.
    pub utilization: f64,
    pub status: ResourceStatus,
}
