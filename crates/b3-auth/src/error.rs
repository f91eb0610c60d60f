//! Error types for b3-auth.
//!
//! Error messages name configuration keys but never include their values.

/// Result type alias for b3-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for b3-auth operations.
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

    /// Name of the missing configuration value, if that is what failed.
    pub fn missing_value(&self) -> Option<&'static str> {
        match self.kind {
            ErrorKind::MissingValue(name) => Some(name),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// A required configuration value is absent or empty.
    #[error("Configuration error: missing {0}")]
    MissingValue(&'static str),

    /// A configured base URL does not parse.
    #[error("Invalid URL for {name}: {reason}")]
    InvalidUrl { name: &'static str, reason: String },
}
