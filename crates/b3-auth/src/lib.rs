//! # b3-auth
//!
//! Credentials and static configuration consumed by the storefront
//! request layer.
//!
//! ## Security
//!
//! - Tokens and secrets are redacted in Debug output
//! - Configuration errors name the missing value, never its content
//! - Token acquisition is out of scope: tokens are handed in by the
//!   application after login and only read by the dispatcher
//!
//! ## Example
//!
//! ```rust,ignore
//! use b3_storefront_auth::{SessionStore, SessionTokens, StorefrontConfig};
//!
//! let config = StorefrontConfig::from_env()?;
//! let session = SessionStore::new(SessionTokens::from_env());
//!
//! // Later, after the user logs in:
//! session.update(|tokens| tokens.b2b_token = new_token);
//! ```

mod config;
mod cookies;
mod credentials;
mod error;

pub use config::{AlternateHost, AlternateHostConfig, StoreIdentity, StorefrontConfig};
pub use cookies::{CookieStore, StaticCookies, XSRF_COOKIE};
pub use credentials::{SessionStore, SessionTokens};
pub use error::{Error, ErrorKind, Result};
