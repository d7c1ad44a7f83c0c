//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust
//! use cloudcost::prelude::*;
//! ```

// Core result/error types
pub use crate::Error;
pub use crate::ErrorCategory;
pub use crate::Result;

// Calculators
pub use crate::anomaly::{detect_anomaly, detect_anomaly_default};
pub use crate::budget::evaluate_budget;
pub use crate::forecast::{forecast_next_period, rolling_average};
pub use crate::pricing::{cheapest, compare_providers, savings_vs_cheapest};
pub use crate::savings::{schedule_savings, total_savings};
pub use crate::segment::segment_costs;

// Value records
pub use crate::types::{
    CostMetric, CostPoint, Optimization, Priority, Resource, ResourceStatus, SavingsOption,
    ServiceCost, TrendDirection,
};

// Calculator inputs and outputs
pub use crate::anomaly::AnomalyReading;
pub use crate::budget::{BudgetConfig, BudgetOutlook, BudgetStatus, SpendWindow};
pub use crate::forecast::Forecast;
pub use crate::pricing::{MigrationSavings, PricingTable, ProviderPricing, Workload};
pub use crate::savings::{SavingsTotal, ScheduleSavings, Selection, ShutdownWindow};
pub use crate::segment::{SegmentSummary, TagFilter, TaggedCost};

// External capabilities
pub use crate::analysis::{
    AnalysisProvider, AnalysisRequest, AnalysisResponse, CostSummary, HttpAnalysisClient,
};
pub use crate::ingest::{RowSet, parse_rows};
pub use crate::report::{Report, ReportBuilder};
