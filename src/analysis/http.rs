use async_trait::async_trait;
use tracing::{debug, warn};

use super::{AnalysisProvider, AnalysisRequest, AnalysisResponse};
use crate::{Error, Result};

/// HTTP-backed [`AnalysisProvider`].
///
/// Posts the request to a single endpoint and returns whatever analysis
/// text comes back. No retry and no recovery; a failed call is the
/// caller's notice to show.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    http: reqwest::Client,
    endpoint: String,
    bearer_token: Option<String>,
}

impl HttpAnalysisClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::builder(endpoint).build()
    }

    pub fn builder(endpoint: impl Into<String>) -> HttpAnalysisClientBuilder {
        HttpAnalysisClientBuilder {
            endpoint: endpoint.into(),
            bearer_token: None,
            http: None,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[derive(Debug)]
pub struct HttpAnalysisClientBuilder {
    endpoint: String,
    bearer_token: Option<String>,
    http: Option<reqwest::Client>,
}

impl HttpAnalysisClientBuilder {
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Use a preconfigured HTTP client instead of the default.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    pub fn build(self) -> HttpAnalysisClient {
        HttpAnalysisClient {
            http: self.http.unwrap_or_default(),
            endpoint: self.endpoint,
            bearer_token: self.bearer_token,
        }
    }
}

#[async_trait]
impl AnalysisProvider for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        debug!(
            endpoint = %self.endpoint,
            resources = request.resources.len(),
            "requesting cost analysis"
        );

        let mut builder = self.http.post(&self.endpoint).json(request);
        if let Some(token) = &self.bearer_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "cost analysis request failed");
            return Err(Error::Api {
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
                status: Some(status.as_u16()),
            });
        }

        Ok(response.json::<AnalysisResponse>().await?)
    }
}
