//! MCP stdio Server
//!
//! Async Tokio task that handles JSON-RPC 2.0 requests over stdin/stdout.
//! Pure protocol implementation with no framework dependencies; every
//! diagnostic goes through tracing (stderr in the binaries), never stdout.

use crate::api::BikaTransport;
use crate::config::BikaConfig;
use crate::mcp::handlers::{initialize, resources, tools};
use crate::mcp::types::{MCPError, MCPNotification, MCPRequest, MCPResponse};
use serde_json::json;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tracing::{debug, info, instrument, warn};

/// Shared state for MCP request handling
///
/// Holds the transport and the immutable configuration. Constructed once at
/// startup; handlers only ever read from it.
pub struct McpServices<T: BikaTransport> {
    pub transport: Arc<T>,
    pub config: Arc<BikaConfig>,
}

/// Run the MCP stdio server
///
/// Reads JSON-RPC requests from stdin, processes them via handlers, and
/// writes responses to stdout. Runs until EOF on stdin.
///
/// # Returns
///
/// Returns Ok(()) when stdin is closed, or Err on fatal I/O errors
#[instrument(skip(services))]
pub async fn run_mcp_server<T: BikaTransport>(services: McpServices<T>) -> anyhow::Result<()> {
    info!("Bika MCP stdio server started");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let reader = BufReader::new(stdin);
    let mut writer = BufWriter::new(stdout);
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        // Parse JSON-RPC request; a message without an id is a notification
        // and gets no response
        let request: MCPRequest = match serde_json::from_str(&line) {
            Ok(req) => req,
            Err(request_err) => {
                if let Ok(notification) = serde_json::from_str::<MCPNotification>(&line) {
                    debug!("MCP notification: {}", notification.method);
                    continue;
                }
                warn!("Failed to parse JSON-RPC request: {}", request_err);
                let error_response = MCPResponse::error(
                    0, // Unknown ID since parsing failed
                    MCPError::parse_error(format!("Invalid JSON: {}", request_err)),
                );
                write_response(&mut writer, &error_response).await?;
                continue;
            }
        };

        debug!("MCP request: {} (id={})", request.method, request.id);

        let response = handle_request(&services, request).await;

        write_response(&mut writer, &response).await?;
    }

    info!("Bika MCP stdio server stopped (stdin closed)");
    Ok(())
}

/// Handle a JSON-RPC request and return a response
async fn handle_request<T: BikaTransport>(
    services: &McpServices<T>,
    request: MCPRequest,
) -> MCPResponse {
    let result = match request.method.as_str() {
        "initialize" => initialize::handle_initialize(request.params),
        "ping" => Ok(json!({})),
        "tools/list" => tools::handle_tools_list(request.params),
        "tools/call" => tools::handle_tools_call(services, request.params).await,
        "resources/list" => resources::handle_resources_list(request.params),
        "resources/read" => resources::handle_resources_read(&services.config, request.params),
        _ => {
            warn!("Unknown MCP method: {}", request.method);
            Err(MCPError::method_not_found(&request.method))
        }
    };

    match result {
        Ok(result) => {
            debug!("MCP request {} succeeded", request.id);
            MCPResponse::success(request.id, result)
        }
        Err(error) => {
            warn!(
                "MCP request {} failed: {} (code: {})",
                request.id, error.message, error.code
            );
            MCPResponse::error(request.id, error)
        }
    }
}

/// Write a JSON-RPC response as a single line on stdout
async fn write_response(
    writer: &mut BufWriter<tokio::io::Stdout>,
    response: &MCPResponse,
) -> anyhow::Result<()> {
    let json = serde_json::to_string(response)?;
    writer.write_all(json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
