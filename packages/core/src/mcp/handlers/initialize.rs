//! MCP Initialize Handler
//!
//! Handles the MCP initialization handshake and capability discovery.
//! This is the first method called when a client connects to the server.

use crate::mcp::types::MCPError;
use serde_json::{json, Value};

/// Supported MCP protocol versions (for backward compatibility)
const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &[
    "2025-06-18", // Latest spec (future-proof)
    "2025-03-26", // Streamable HTTP (current)
    "2024-11-05", // HTTP+SSE (deprecated but supported)
];

/// Handle MCP initialize request
///
/// # Protocol Flow
///
/// 1. Client sends initialize request with their protocol version
/// 2. Server validates version compatibility
/// 3. Server returns supported version + capabilities
/// 4. Client sends initialized notification (handled separately)
/// 5. Normal operations begin
///
/// # Errors
///
/// Returns error if:
/// - protocolVersion is missing or invalid
/// - Client requests unsupported protocol version
pub fn handle_initialize(params: Value) -> Result<Value, MCPError> {
    let client_version = params["protocolVersion"]
        .as_str()
        .ok_or_else(|| MCPError::invalid_params("Missing protocolVersion parameter".to_string()))?;

    // Version negotiation: echo back the client's version if supported
    if !SUPPORTED_PROTOCOL_VERSIONS.contains(&client_version) {
        return Err(MCPError::invalid_request(format!(
            "Unsupported protocol version: {}. Server supports: {:?}",
            client_version, SUPPORTED_PROTOCOL_VERSIONS
        )));
    }

    // Tool and resource catalogs are static, so listChanged is false for both
    Ok(json!({
        "protocolVersion": client_version,
        "serverInfo": {
            "name": "bika-mcp",
            "version": env!("CARGO_PKG_VERSION")
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            },
            "resources": {
                "listChanged": false
            },
            "prompts": {}
        },
        "instructions": {
            "spaces": "Most tools accept an optional spaceId. When omitted, the server falls back to the BIKA_SPACE_ID configured at startup; if neither is present the call fails before reaching the Bika API. Use bika_list_spaces to discover accessible spaces.",
            "api_versions": "Record tools exist in two generations: v1 (simple CRUD addressed by cells) and v2 (pagination, sorting, field selection, batch operations addressed by fields). Pick the generation per tool name; there is no automatic negotiation.",
            "resources": "Reference data is served as resources: bika://node-types, bika://field-types, bika://view-types, bika://formula-functions, and bika://docs/<topic> for markdown documentation (API usage, field cell values, filter query language)."
        }
    }))
}

// Include tests
#[cfg(test)]
#[path = "initialize_test.rs"]
mod initialize_test;
