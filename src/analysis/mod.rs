//! Remote cost-analysis capability.
//!
//! Analysis is delegated to an opaque external service behind the
//! [`AnalysisProvider`] trait so the computation core never depends on a
//! concrete transport. The bundled [`HttpAnalysisClient`] posts the
//! request as JSON; callers inject their own implementation for anything
//! else.

mod http;

pub use http::{HttpAnalysisClient, HttpAnalysisClientBuilder};

use async_trait::async_trait;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::types::{Resource, ServiceCost};

/// Aggregate cost figures handed to the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    pub total_monthly_cost: f64,
    pub service_costs: Vec<ServiceCost>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub cost_data: CostSummary,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Free-text analysis, rendered verbatim by the caller.
    pub analysis: String,
}

/// Capability that turns a cost summary and resource list into free-text
/// analysis.
///
/// Implementations perform a single request with no retry; failures
/// surface as errors for the caller to present as a non-fatal notice.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_request_wire_shape() {
        let request = AnalysisRequest {
            cost_data: CostSummary {
                total_monthly_cost: 18432.0,
                service_costs: catalog::service_costs(),
            },
            resources: catalog::top_resources(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("costData").is_some());
        assert!(json["costData"].get("totalMonthlyCost").is_some());
        assert_eq!(json["resources"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_response_parses_analysis_text() {
        let response: AnalysisResponse =
            serde_json::from_str(r#"{"analysis":"Shut down staging-api-server."}"#).unwrap();
        assert!(response.analysis.contains("staging-api-server"));
    }
}
