//! Tests for MCP Initialize Handler

use super::*;
use serde_json::json;

#[test]
fn test_initialize_success() {
    let params = json!({
        "protocolVersion": "2024-11-05",
        "clientInfo": {
            "name": "test-client",
            "version": "1.0.0"
        }
    });

    let result = handle_initialize(params).unwrap();

    // Verify protocol version is echoed back
    assert_eq!(result["protocolVersion"], "2024-11-05");

    // Verify server info
    assert_eq!(result["serverInfo"]["name"], "bika-mcp");
    assert!(result["serverInfo"]["version"].is_string());

    // Verify capabilities structure (per MCP 2024-11-05 spec)
    assert!(result["capabilities"]["tools"].is_object());
    assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
    assert!(result["capabilities"]["resources"].is_object());
    assert_eq!(result["capabilities"]["resources"]["listChanged"], false);
    assert!(result["capabilities"]["prompts"].is_object());
}

#[test]
fn test_initialize_newer_protocol_version() {
    let params = json!({
        "protocolVersion": "2025-06-18",
        "clientInfo": { "name": "test-client" }
    });

    let result = handle_initialize(params).unwrap();
    assert_eq!(result["protocolVersion"], "2025-06-18");
}

#[test]
fn test_initialize_wrong_version() {
    let params = json!({
        "protocolVersion": "1999-01-01",  // Unsupported version
        "clientInfo": {
            "name": "test-client"
        }
    });

    let result = handle_initialize(params);
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert_eq!(err.code, crate::mcp::types::INVALID_REQUEST);
    assert!(err.message.contains("Unsupported protocol version"));
    assert!(err.message.contains("1999-01-01"));
    assert!(err.message.contains("2024-11-05"));
}

#[test]
fn test_initialize_missing_version() {
    let params = json!({
        "clientInfo": {
            "name": "test-client"
        }
    });

    let result = handle_initialize(params);
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert_eq!(err.code, crate::mcp::types::INVALID_PARAMS);
    assert!(err.message.contains("Missing protocolVersion"));
}

#[test]
fn test_initialize_empty_params() {
    let params = json!({});

    let result = handle_initialize(params);
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert_eq!(err.code, crate::mcp::types::INVALID_PARAMS);
}
