//! User Tool Handlers

use crate::api::{ApiRequest, BikaTransport};
use crate::mcp::handlers::send;
use crate::mcp::server::McpServices;
use crate::mcp::types::MCPError;
use serde_json::Value;

/// `GET /v1/user/profile`
fn get_user_profile_request() -> ApiRequest {
    ApiRequest::get("/v1/user/profile")
}

/// Handle bika_get_user_profile
pub async fn handle_get_user_profile<T: BikaTransport>(
    services: &McpServices<T>,
    _params: Value,
) -> Result<Value, MCPError> {
    send(services, get_user_profile_request()).await
}
