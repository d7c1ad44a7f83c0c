//! # cloudcost
//!
//! Pure computation core for cloud-billing analytics.
//!
//! This crate provides the calculators behind a cost dashboard: linear trend
//! forecasting, anomaly detection against a rolling average, budget tracking
//! with overspend projection, savings aggregation, shutdown-schedule
//! simulation, and multi-cloud price comparison. Every calculator is a pure
//! function over caller-owned value records: same inputs, same outputs, no
//! hidden state, no I/O. The one external capability (remote cost analysis)
//! sits behind the [`analysis::AnalysisProvider`] trait.
//!
//! ## Quick Start
//!
//! ```rust
//! use cloudcost::{catalog, forecast::forecast_next_period};
//!
//! let history = catalog::cost_trends();
//! let projection = forecast_next_period(&history)?;
//! assert!(projection.forecast > history.last().unwrap().cost);
//! # Ok::<(), cloudcost::Error>(())
//! ```
//!
//! ## Budget Tracking
//!
//! ```rust
//! use cloudcost::budget::{BudgetConfig, SpendWindow, evaluate_budget};
//!
//! let config = BudgetConfig::new(5000.0)?;
//! let outlook = evaluate_budget(&config, &SpendWindow {
//!     current_spend: 18_432.0,
//!     forecasted_spend: 19_531.0,
//!     days_elapsed: 22,
//!     days_in_period: 30,
//! });
//! assert!(outlook.is_over_budget);
//! # Ok::<(), cloudcost::Error>(())
//! ```

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analysis;
pub mod anomaly;
pub mod budget;
pub mod catalog;
pub mod forecast;
pub mod ingest;
pub mod prelude;
pub mod pricing;
pub mod report;
pub mod savings;
pub mod segment;
pub mod types;

// Re-exports for convenience
pub use analysis::{
    AnalysisProvider, AnalysisRequest, AnalysisResponse, CostSummary, HttpAnalysisClient,
    HttpAnalysisClientBuilder,
};
pub use anomaly::{
    AnomalyReading, DEFAULT_THRESHOLD_PERCENT, detect_anomaly, detect_anomaly_default,
};
pub use budget::{BudgetConfig, BudgetOutlook, BudgetStatus, SpendWindow, evaluate_budget};
pub use forecast::{Forecast, MIN_HISTORY_POINTS, forecast_next_period, rolling_average};
pub use ingest::{RowSet, parse_rows};
pub use pricing::{
    MigrationSavings, PricingTable, PricingTableBuilder, ProviderCost, ProviderPricing, Workload,
    cheapest, compare_providers, global_pricing_table, savings_vs_cheapest,
};
pub use report::{Report, ReportBuilder};
pub use savings::{
    SavingsTotal, ScheduleSavings, Selection, ShutdownWindow, schedule_savings, total_savings,
};
pub use segment::{SegmentSummary, TagFilter, TaggedCost, segment_costs};
pub use types::{
    CostMetric, CostPoint, Optimization, Priority, Resource, ResourceStatus, SavingsOption,
    ServiceCost, TrendDirection,
};

/// Error type for cloudcost operations.
///
/// Calculators return these synchronously and never log, retry, or recover
/// themselves; that is the presentation layer's responsibility.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Too few data points for the requested calculation.
    #[error("insufficient data: {required} points required, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Caller-supplied configuration is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A degenerate input would divide by zero.
    #[error("division by zero: {0} is zero")]
    DivisionByZero(&'static str),

    /// Network connectivity or request failed.
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The analysis service returned an error response.
    #[error("API error (HTTP {status}): {message}", status = status.map(|s| s.to_string()).unwrap_or_else(|| "unknown".into()))]
    Api {
        message: String,
        status: Option<u16>,
    },
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Degenerate or undersized computation input
    Computation,
    /// Invalid caller-supplied configuration
    Configuration,
    /// Network or service errors that may succeed on retry
    Transient,
    /// Internal errors (serialization, unexpected responses)
    Internal,
}

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration(message.into())
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InsufficientData { .. } | Error::DivisionByZero(_) => ErrorCategory::Computation,

            Error::InvalidConfiguration(_) => ErrorCategory::Configuration,

            Error::Network(_) => ErrorCategory::Transient,
            Error::Api {
                status: Some(500..=599),
                ..
            } => ErrorCategory::Transient,

            Error::Json(_) | Error::Api { .. } => ErrorCategory::Internal,
        }
    }

    pub fn is_computation_error(&self) -> bool {
        self.category() == ErrorCategory::Computation
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::Transient
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => *status,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InsufficientData {
            required: 3,
            actual: 1,
        };
        assert!(err.to_string().contains("3 points required"));

        let err = Error::DivisionByZero("rolling average");
        assert!(err.to_string().contains("rolling average"));
    }

    #[test]
    fn test_error_categories() {
        let short = Error::InsufficientData {
            required: 3,
            actual: 0,
        };
        assert!(short.is_computation_error());
        assert!(!short.is_retryable());

        let config = Error::invalid_config("monthly budget must be positive");
        assert!(config.is_configuration_error());

        let server = Error::Api {
            message: "internal error".to_string(),
            status: Some(503),
        };
        assert!(server.is_retryable());
        assert_eq!(server.status_code(), Some(503));

        let client = Error::Api {
            message: "bad request".to_string(),
            status: Some(400),
        };
        assert!(!client.is_retryable());
        assert_eq!(client.category(), ErrorCategory::Internal);
    }
}
