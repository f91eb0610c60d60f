//! # b3-client
//!
//! HTTP transport for the B2B storefront request layer.
//!
//! This crate provides the low-level `fetch`-like primitive that the
//! dispatcher in `b3-request` forwards every call to:
//! - An owned request descriptor ([`OutboundRequest`]) built fresh per call
//! - JSON and multipart bodies
//! - Query-string serialization for GET calls
//! - A [`Transport`] trait so the dispatcher can be tested without a network
//! - A `reqwest`-backed implementation ([`HttpTransport`])
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Dispatcher                             │
//! │  (b3-request: endpoint + auth header selection, GraphQL)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   dyn Transport                             │
//! │  - fetch(OutboundRequest) -> parsed JSON body               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HttpTransport                            │
//! │  - reqwest client, timeouts, compression, tracing           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use b3_storefront_client::{ClientConfig, HttpTransport, OutboundRequest, RequestMethod, Transport};
//!
//! let transport = HttpTransport::new(ClientConfig::default())?;
//! let request = OutboundRequest::new(RequestMethod::Get, "https://api.example.com/api/v2/companies")
//!     .header("authToken", token);
//! let body: serde_json::Value = transport.fetch(request).await?;
//! ```

mod client;
mod config;
mod error;
mod query;
mod request;
mod transport;

pub use client::HttpTransport;
pub use config::ClientConfig;
pub use error::{Error, ErrorKind, Result};
pub use query::{append_query, encode_query};
pub use request::{FormPart, MultipartForm, OutboundRequest, RequestBody, RequestMethod};
pub use transport::Transport;

/// User-Agent string for the transport
pub const USER_AGENT: &str = concat!("b3-storefront/", env!("CARGO_PKG_VERSION"));
