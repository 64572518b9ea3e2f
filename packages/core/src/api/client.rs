//! Authenticated HTTP Transport
//!
//! A single operation: perform one Bika Open API call described by an
//! [`ApiRequest`] and hand back the decoded JSON payload. Bearer token and
//! content-type headers are attached on every call. No retries, no
//! independent timeout — the reqwest defaults apply.

use crate::api::{ApiRequest, BikaApiError};
use crate::config::BikaConfig;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Transport seam for outbound Bika API calls.
///
/// Handlers are generic over this trait; tests substitute an echoing stub
/// while production uses [`BikaClient`].
#[async_trait]
pub trait BikaTransport: Send + Sync {
    /// Perform one API call and return the decoded JSON payload.
    async fn send(&self, request: ApiRequest) -> Result<Value, BikaApiError>;
}

/// reqwest-backed Bika Open API client
///
/// Holds the connection pool plus the immutable pieces of configuration it
/// needs. Constructed once at startup and shared across all tool calls.
pub struct BikaClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl BikaClient {
    pub fn new(config: &BikaConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_token: config.api_token.clone(),
        }
    }
}

#[async_trait]
impl BikaTransport for BikaClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, BikaApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = %request.method, path = %request.path, "Bika API request");

        let mut builder = self
            .http
            .request(request.method, &url)
            .bearer_auth(&self.api_token)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Bika API error response");
            return Err(BikaApiError::api(status.as_u16(), text));
        }

        serde_json::from_str(&text).map_err(BikaApiError::Decode)
    }
}
