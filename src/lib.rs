//! # b3-storefront
//!
//! Request plumbing for a B2B storefront: one dispatcher that routes REST
//! and GraphQL calls to the first-party B2B API, the commerce storefront
//! API, or the storefront proxy, with the right credentials for each.
//!
//! ## Security
//!
//! - Tokens and alternate-host secrets are redacted in Debug output
//! - Tracing spans skip credential parameters and request bodies
//!
//! ## Crates
//!
//! - **b3-storefront-client** - HTTP transport, request model, query encoding
//! - **b3-storefront-auth** - Store configuration, session tokens, cookies
//! - **b3-storefront-request** - Endpoint resolver and request dispatcher
//! - **b3-storefront-quote** - Quote detail summary view-model
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use b3_storefront::request::{Dispatcher, GraphqlOptions, GraphqlRequest, RequestType};
//! use b3_storefront::auth::{SessionStore, SessionTokens, StorefrontConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StorefrontConfig::from_env()?;
//!     let session = SessionStore::new(SessionTokens::from_env());
//!     let dispatcher = Dispatcher::new(config, session)?;
//!
//!     let companies: serde_json::Value = dispatcher
//!         .get("/api/v2/companies", RequestType::B2BRest)
//!         .await?;
//!
//!     let quotes: serde_json::Value = dispatcher
//!         .graphql_b2b(
//!             &GraphqlRequest::new("{ quotes { totalCount } }"),
//!             &GraphqlOptions::new(),
//!         )
//!         .await?;
//!
//!     println!("{companies}\n{quotes}");
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use b3_storefront_auth as auth;
#[cfg(feature = "client")]
pub use b3_storefront_client as client;
#[cfg(feature = "quote")]
pub use b3_storefront_quote as quote;
#[cfg(feature = "request")]
pub use b3_storefront_request as request;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use b3_storefront_auth::{SessionStore, SessionTokens, StorefrontConfig};
#[cfg(feature = "client")]
pub use b3_storefront_client::{ClientConfig, HttpTransport};
#[cfg(feature = "request")]
pub use b3_storefront_request::{Dispatcher, GraphqlOptions, GraphqlRequest, RequestType};
