//! Model Context Protocol (MCP) Integration
//!
//! Pure protocol implementation for a stdio-based JSON-RPC 2.0 server.
//! Exposes the Bika Open API to AI agents as tools and resources.
//!
//! # Architecture
//!
//! - **Stateless dispatch**: each tool call is validated, translated to one
//!   API request, sent, and formatted — nothing is shared across calls
//!   beyond the immutable configuration and catalogs
//! - **stdio transport**: JSON-RPC 2.0 over stdin/stdout
//! - **Transport seam**: handlers are generic over [`crate::BikaTransport`],
//!   so tests run against a stub instead of the network
//!
//! # Usage
//!
//! AI agents send JSON-RPC requests via stdio:
//!
//! ```json
//! {
//!   "jsonrpc": "2.0",
//!   "id": 1,
//!   "method": "tools/call",
//!   "params": {
//!     "name": "bika_list_records_v2",
//!     "arguments": { "databaseId": "dbxyz" }
//!   }
//! }
//! ```

pub mod handlers;
pub mod server;
pub mod types;

pub use server::{run_mcp_server, McpServices};
pub use types::{MCPError, MCPNotification, MCPRequest, MCPResponse};
