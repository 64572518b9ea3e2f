//! Bika Open API Client Layer
//!
//! Outbound request descriptors, the transport trait handlers are generic
//! over, and the reqwest-backed production client.

pub mod client;
pub mod error;
pub mod request;

pub use client::{BikaClient, BikaTransport};
pub use error::BikaApiError;
pub use request::ApiRequest;
