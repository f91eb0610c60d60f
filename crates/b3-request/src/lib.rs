//! # b3-request
//!
//! Request dispatcher for the B2B storefront.
//!
//! Every call names a [`RequestType`] tag. The tag picks the backend (the
//! first-party B2B API, the storefront commerce API, or the first-party
//! proxy in front of the latter) and the authentication scheme:
//!
//! | Tag              | URL                                            | Auth                                   |
//! |------------------|------------------------------------------------|----------------------------------------|
//! | `B2BRest`        | `{api_base}{path}`                             | `authToken` header                     |
//! | `BCRest`         | `path` as given                                | `x-xsrf-token` from the CSRF cookie    |
//! | `B2BGraphql`     | `{api_base}/graphql`                           | bearer B2B token                       |
//! | `BCGraphql`      | `{storefront_base}/graphql`                    | bearer storefront token                |
//! | `BCProxyGraphql` | `{api_base}/api/v3/proxy/bc-storefront/graphql`| bearer B2B token, or store/channel ids |
//!
//! GraphQL responses are unwrapped: `data` is returned, `errors[0]` becomes
//! a user notification plus a failed call, and the session-expired code
//! (`40101`) sends the user back to the login route.
//!
//! ## Example
//!
//! ```rust,ignore
//! use b3_storefront_auth::{SessionStore, SessionTokens, StorefrontConfig};
//! use b3_storefront_request::{Dispatcher, GraphqlOptions, GraphqlRequest, RequestType};
//!
//! let dispatcher = Dispatcher::builder(StorefrontConfig::from_env()?)
//!     .session(SessionStore::new(SessionTokens::from_env()))
//!     .build()?;
//!
//! let companies: serde_json::Value = dispatcher
//!     .get("/api/v2/companies", RequestType::B2BRest)
//!     .await?;
//!
//! let quotes: serde_json::Value = dispatcher
//!     .graphql_b2b(&GraphqlRequest::new("{ quotes { edges { node { id } } } }"), &GraphqlOptions::new())
//!     .await?;
//! ```

mod dispatcher;
mod endpoint;
mod error;
mod graphql;
mod request_type;
mod ui;

pub use dispatcher::{Dispatcher, DispatcherBuilder, GraphqlOptions, SessionExpiryPolicy};
pub use endpoint::EndpointResolver;
pub use error::{Error, ErrorKind, Result};
pub use graphql::{ErrorExtensions, GraphqlError, GraphqlOutcome, GraphqlRequest, GraphqlResponse, SESSION_EXPIRED_CODE};
pub use request_type::RequestType;
pub use ui::{HeadlessNavigator, Navigator, Notifier, TracingNotifier, LOGIN_ROUTE};

// Re-exported so callers can build bodies and plug in transports without
// depending on the lower crates directly.
pub use b3_storefront_client::{MultipartForm, RequestMethod, Transport};
