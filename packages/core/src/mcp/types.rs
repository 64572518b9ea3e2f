//! MCP Protocol Types
//!
//! JSON-RPC 2.0 request/response/notification types and error codes for the
//! MCP server. Requests carry an `id` and expect a response; notifications
//! carry none and receive none.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Standard JSON-RPC error codes
pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

// Custom Bika adapter error codes (server range starts at -32000 per spec)
pub const API_ERROR: i64 = -32000;
pub const SPACE_RESOLUTION_ERROR: i64 = -32001;
pub const RESOURCE_NOT_FOUND: i64 = -32002;
pub const RESOURCE_READ_FAILED: i64 = -32003;

fn deserialize_jsonrpc_version<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let version = String::deserialize(deserializer)?;
    if version != "2.0" {
        return Err(serde::de::Error::custom(format!(
            "unsupported JSON-RPC version: {version}"
        )));
    }
    Ok(version)
}

/// JSON-RPC 2.0 request
///
/// Must carry an `id`; a message without one is a notification, not a
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MCPRequest {
    #[serde(deserialize_with = "deserialize_jsonrpc_version")]
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// JSON-RPC 2.0 notification (no `id`, no response)
///
/// `deny_unknown_fields` makes a request fail to parse as a notification:
/// the extra `id` field is rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MCPNotification {
    #[serde(deserialize_with = "deserialize_jsonrpc_version")]
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// JSON-RPC 2.0 response
///
/// Exactly one of `result` and `error` is set; the absent one is omitted
/// from the serialized form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MCPResponse {
    pub jsonrpc: String,
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<MCPError>,
}

impl MCPResponse {
    /// Create a success response
    pub fn success(id: u64, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(id: u64, error: MCPError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MCPError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl MCPError {
    /// Invalid JSON received
    pub fn parse_error(message: String) -> Self {
        Self {
            code: PARSE_ERROR,
            message,
            data: None,
        }
    }

    /// Malformed request object
    pub fn invalid_request(message: String) -> Self {
        Self {
            code: INVALID_REQUEST,
            message,
            data: None,
        }
    }

    /// Unknown JSON-RPC method
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {method}"),
            data: None,
        }
    }

    /// Argument validation failure
    pub fn invalid_params(message: String) -> Self {
        Self {
            code: INVALID_PARAMS,
            message,
            data: None,
        }
    }

    /// Internal server fault
    pub fn internal_error(message: String) -> Self {
        Self {
            code: INTERNAL_ERROR,
            message,
            data: None,
        }
    }

    /// Outbound Bika API call failed (non-2xx, network, or bad JSON)
    pub fn api_error(message: String) -> Self {
        Self {
            code: API_ERROR,
            message,
            data: None,
        }
    }

    /// Required space id absent and no default configured
    pub fn space_resolution(message: String) -> Self {
        Self {
            code: SPACE_RESOLUTION_ERROR,
            message,
            data: None,
        }
    }

    /// URI not present in the resource catalog
    pub fn resource_not_found(uri: &str) -> Self {
        Self {
            code: RESOURCE_NOT_FOUND,
            message: format!("Unknown resource: {uri}"),
            data: None,
        }
    }

    /// Registered documentation file could not be read
    pub fn resource_read_failed(uri: &str) -> Self {
        Self {
            code: RESOURCE_READ_FAILED,
            message: format!("Failed to read documentation file: {uri}"),
            data: None,
        }
    }
}

// Include tests
#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
