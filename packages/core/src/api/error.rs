//! API Client Error Types
//!
//! Failure modes of a single outbound Bika API call. Remote error bodies
//! are opaque — the status code and body text are relayed verbatim, never
//! parsed into a structured form.

use thiserror::Error;

/// Errors from one outbound Bika API call
#[derive(Error, Debug)]
pub enum BikaApiError {
    /// Non-2xx response; status and body text relayed verbatim
    #[error("Bika API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// The request never produced a usable response
    #[error("Bika API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// 2xx response whose body is not valid JSON
    #[error("Invalid JSON in Bika API response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl BikaApiError {
    /// Create an error for a non-2xx response
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }
}
