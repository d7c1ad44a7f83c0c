//! Value records shared across the calculators.
//!
//! Everything here is immutable plain data, constructed fresh per call and
//! owned by the caller. Nothing is mutated after construction.

mod cost;
mod optimization;
mod resource;

pub use cost::{CostMetric, CostPoint, ServiceCost, TrendDirection};
pub use optimization::{Optimization, Priority, SavingsOption};
pub use resource::{Resource, ResourceStatus};
