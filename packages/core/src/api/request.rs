//! Outbound Request Descriptors
//!
//! A fully-formed description of one Bika Open API call: HTTP method,
//! interpolated path, query pairs, and optional JSON body. Each tool's
//! translator produces a fresh descriptor per call; descriptors are never
//! cached or reused.

use reqwest::Method;
use serde_json::Value;

/// One outbound API call, ready for the transport.
///
/// Identifiers are already interpolated into `path`; no placeholders
/// remain. Query pairs keep their insertion order — some endpoints
/// (indexed `sort[i][...]` keys) depend on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Append a query parameter. Repeated keys are legal — several
    /// endpoints expect the same key more than once (`fields`, indexed
    /// sort pairs).
    pub fn push_query(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }
}
