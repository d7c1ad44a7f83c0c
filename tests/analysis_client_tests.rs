//! Analysis Client Tests
//!
//! Exercises the HTTP-backed analysis capability against a mock server:
//! request shape, bearer auth, and error surfacing.
//!
//! Run: cargo test --test analysis_client_tests

use cloudcost::analysis::{AnalysisProvider, AnalysisRequest, CostSummary, HttpAnalysisClient};
use cloudcost::catalog;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("cloudcost=debug")
        .try_init();
}

fn sample_request() -> AnalysisRequest {
    AnalysisRequest {
        cost_data: CostSummary {
            total_monthly_cost: 18_432.0,
            service_costs: catalog::service_costs(),
        },
        resources: catalog::top_resources(),
    }
}

#[tokio::test]
async fn test_analyze_round_trip() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/functions/v1/analyze-costs"))
        .and(body_partial_json(json!({
            "costData": { "totalMonthlyCost": 18432.0 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "analysis": "Stop the idle staging-api-server to save roughly $634/month."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        HttpAnalysisClient::new(format!("{}/functions/v1/analyze-costs", server.uri()));
    let response = client.analyze(&sample_request()).await.unwrap();

    assert!(response.analysis.contains("staging-api-server"));
}

#[tokio::test]
async fn test_bearer_token_is_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "analysis": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpAnalysisClient::builder(format!("{}/analyze", server.uri()))
        .bearer_token("test-token")
        .build();

    client.analyze(&sample_request()).await.unwrap();
}

#[tokio::test]
async fn test_server_error_surfaces_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(503).set_body_string("service overloaded"))
        .mount(&server)
        .await;

    let client = HttpAnalysisClient::new(format!("{}/analyze", server.uri()));
    let err = client.analyze(&sample_request()).await.unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert!(err.is_retryable());
    assert!(err.to_string().contains("service overloaded"));
}

#[tokio::test]
async fn test_client_error_is_not_retryable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(400).set_body_string("malformed request"))
        .mount(&server)
        .await;

    let client = HttpAnalysisClient::new(format!("{}/analyze", server.uri()));
    let err = client.analyze(&sample_request()).await.unwrap_err();

    assert_eq!(err.status_code(), Some(400));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_malformed_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = HttpAnalysisClient::new(format!("{}/analyze", server.uri()));
    let err = client.analyze(&sample_request()).await.unwrap_err();

    // Body decoding failures come back through the transport error path.
    assert!(err.status_code().is_none());
}
