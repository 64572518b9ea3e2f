//! System Tool Handlers
//!
//! Space-independent operations: system metadata and the space listing.

use crate::api::{ApiRequest, BikaTransport};
use crate::mcp::handlers::send;
use crate::mcp::server::McpServices;
use crate::mcp::types::MCPError;
use serde_json::Value;

/// `GET /v1/system/meta`
fn get_system_meta_request() -> ApiRequest {
    ApiRequest::get("/v1/system/meta")
}

/// `GET /v1/spaces`
fn list_spaces_request() -> ApiRequest {
    ApiRequest::get("/v1/spaces")
}

/// Handle bika_get_system_meta
pub async fn handle_get_system_meta<T: BikaTransport>(
    services: &McpServices<T>,
    _params: Value,
) -> Result<Value, MCPError> {
    send(services, get_system_meta_request()).await
}

/// Handle bika_list_spaces
pub async fn handle_list_spaces<T: BikaTransport>(
    services: &McpServices<T>,
    _params: Value,
) -> Result<Value, MCPError> {
    send(services, list_spaces_request()).await
}
