//! Bika MCP Server Core
//!
//! This crate exposes the Bika.ai Open API as Model Context Protocol tools
//! and resources, so AI agents can perform remote CRUD operations and read
//! reference documentation through a uniform interface.
//!
//! # Architecture
//!
//! - **Stateless translation**: every tool call is one request/response
//!   round trip — validate arguments, build the API request, perform one
//!   outbound call, relay the JSON payload
//! - **stdio transport**: JSON-RPC 2.0 over stdin/stdout
//! - **Immutable configuration**: loaded once at startup, injected into the
//!   transport and dispatcher, never mutated by a tool call
//! - **Framework agnostic**: no HTTP-server dependencies in the core crate
//!
//! # Modules
//!
//! - [`config`] - Process configuration from the environment
//! - [`api`] - Request descriptors and the authenticated HTTP transport
//! - [`mcp`] - MCP stdio server, tool catalog, and handlers
//! - [`reference`] - Static reference tables and documentation registry

pub mod api;
pub mod config;
pub mod mcp;
pub mod reference;

// Re-export commonly used types
pub use api::{ApiRequest, BikaApiError, BikaClient, BikaTransport};
pub use config::{BikaConfig, ConfigError};
pub use mcp::{run_mcp_server, McpServices};
