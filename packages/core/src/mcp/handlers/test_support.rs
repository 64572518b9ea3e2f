//! Shared test doubles for handler tests
//!
//! An echoing transport that records every request it sees and returns its
//! shape as the payload, plus a failing transport for error-path tests.

use crate::api::{ApiRequest, BikaApiError, BikaTransport};
use crate::config::{BikaConfig, DEFAULT_BASE_URL};
use crate::mcp::server::McpServices;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Transport stub that echoes `{method, path, query, body}` back as the
/// payload instead of calling the network.
#[derive(Default)]
pub struct EchoTransport {
    pub calls: AtomicUsize,
    pub requests: Mutex<Vec<ApiRequest>>,
}

#[async_trait]
impl BikaTransport for EchoTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, BikaApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let echoed = json!({
            "method": request.method.as_str(),
            "path": request.path,
            "query": request.query,
            "body": request.body,
        });
        self.requests.lock().unwrap().push(request);
        Ok(echoed)
    }
}

impl EchoTransport {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Transport stub that always fails with the given HTTP status and body.
pub struct FailingTransport {
    pub status: u16,
    pub body: String,
}

#[async_trait]
impl BikaTransport for FailingTransport {
    async fn send(&self, _request: ApiRequest) -> Result<Value, BikaApiError> {
        Err(BikaApiError::api(self.status, self.body.clone()))
    }
}

/// Test configuration with an optional default space id.
pub fn test_config(default_space_id: Option<&str>) -> BikaConfig {
    BikaConfig {
        api_token: "test-token".to_string(),
        base_url: DEFAULT_BASE_URL.to_string(),
        default_space_id: default_space_id.map(String::from),
        docs_dir: PathBuf::from("bika-docs"),
    }
}

/// Services over an echoing transport.
pub fn echo_services(default_space_id: Option<&str>) -> McpServices<EchoTransport> {
    McpServices {
        transport: Arc::new(EchoTransport::default()),
        config: Arc::new(test_config(default_space_id)),
    }
}

/// Services over a transport that fails every call.
pub fn failing_services(status: u16, body: &str) -> McpServices<FailingTransport> {
    McpServices {
        transport: Arc::new(FailingTransport {
            status,
            body: body.to_string(),
        }),
        config: Arc::new(test_config(Some("spc_default"))),
    }
}
