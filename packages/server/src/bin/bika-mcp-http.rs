//! Bika MCP HTTP Surface
//!
//! Minimal axum server for local liveness checks: `/health` and a root
//! info endpoint. Touches neither the Bika API nor the MCP dispatcher —
//! full MCP functionality lives in the stdio binary (`bika-mcp`).

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "server": "bika-mcp",
        "message": "For full MCP functionality, use the stdio transport (bika-mcp binary)"
    }))
}

/// Info endpoint
async fn info_root() -> Json<Value> {
    Json(json!({
        "name": "bika-mcp",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Model Context Protocol server for Bika.ai integration",
        "endpoints": {
            "health": "/health"
        },
        "note": "For local use, run the bika-mcp binary (stdio transport)"
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let app = Router::new()
        .route("/", get(info_root))
        .route("/health", get(health))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Bika MCP HTTP server running on http://localhost:{port}");
    info!("Health check: http://localhost:{port}/health");

    axum::serve(listener, app).await?;
    Ok(())
}
