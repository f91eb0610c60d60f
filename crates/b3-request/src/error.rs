//! Error types for b3-request.

use crate::request_type::RequestType;

/// Result type alias for b3-request operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for b3-request operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the backend reported an expired session.
    pub fn is_session_expired(&self) -> bool {
        matches!(self.kind, ErrorKind::SessionExpired { .. })
    }

    /// The GraphQL error message, for failed GraphQL calls.
    pub fn graphql_message(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Graphql { message, .. } => Some(message),
            ErrorKind::SessionExpired { message } => message.as_deref(),
            _ => None,
        }
    }

    /// The underlying transport error, if the call failed on the wire.
    pub fn transport_error(&self) -> Option<&b3_storefront_client::Error> {
        match self.kind {
            ErrorKind::Transport(_) => self.source.as_ref()?.downcast_ref(),
            _ => None,
        }
    }

    /// Name of the missing configuration value, for configuration errors.
    pub fn missing_config_value(&self) -> Option<&'static str> {
        match self.kind {
            ErrorKind::Config(_) => self
                .source
                .as_ref()?
                .downcast_ref::<b3_storefront_auth::Error>()?
                .missing_value(),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The transport failed (network, HTTP status, unparsable body).
    #[error("{0}")]
    Transport(String),

    /// Required configuration is missing or invalid.
    #[error("{0}")]
    Config(String),

    /// A request-type tag outside the known set.
    #[error("Invalid request type: {0}")]
    InvalidRequestType(String),

    /// The request type has no GraphQL endpoint.
    #[error("No GraphQL endpoint for request type {0}")]
    NoGraphqlEndpoint(RequestType),

    /// The backend signalled that the session token is no longer valid.
    #[error("Session expired{}", message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
    SessionExpired { message: Option<String> },

    /// First error of a GraphQL response. Displays as the bare message.
    #[error("{message}")]
    Graphql { message: String, code: Option<i64> },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<b3_storefront_client::Error> for Error {
    fn from(err: b3_storefront_client::Error) -> Self {
        Error::with_source(ErrorKind::Transport(err.to_string()), err)
    }
}

impl From<b3_storefront_auth::Error> for Error {
    fn from(err: b3_storefront_auth::Error) -> Self {
        Error::with_source(ErrorKind::Config(err.to_string()), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}
