//! Bika MCP Server Entry Point (stdio transport)
//!
//! Loads configuration from the environment (with an optional `.env` file),
//! then serves MCP over stdin/stdout. All diagnostics go to stderr —
//! stdout carries the JSON-RPC stream.

use bika_mcp_core::api::BikaClient;
use bika_mcp_core::config::{self, BikaConfig};
use bika_mcp_core::mcp::{run_mcp_server, McpServices};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    config::load_dotenv(Path::new(".env"));

    let config = match BikaConfig::from_env() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Please set BIKA_API_TOKEN in your .env file or environment");
            std::process::exit(1);
        }
    };

    let transport = Arc::new(BikaClient::new(&config));
    let services = McpServices { transport, config };

    run_mcp_server(services).await
}
