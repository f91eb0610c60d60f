//! Session tokens and the shared store that holds them.
//!
//! All token types implement custom Debug to redact sensitive data.

use std::sync::{Arc, PoisonError, RwLock};

use serde::Deserialize;
use tracing::debug;

/// Tokens issued to the current storefront session.
///
/// Field names on the wire follow the application state shape
/// (`B2BToken`, `bcGraphqlToken`). An empty string means "not logged in".
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionTokens {
    /// First-party B2B API token, sent as `authToken` or a bearer token.
    #[serde(rename = "B2BToken", default)]
    pub b2b_token: String,
    /// Storefront GraphQL API token.
    #[serde(rename = "bcGraphqlToken", default)]
    pub bc_graphql_token: String,
}

impl std::fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokens")
            .field("b2b_token", &redact(&self.b2b_token))
            .field("bc_graphql_token", &redact(&self.bc_graphql_token))
            .finish()
    }
}

fn redact(token: &str) -> &'static str {
    if token.is_empty() {
        "[EMPTY]"
    } else {
        "[REDACTED]"
    }
}

impl SessionTokens {
    /// Create tokens with the given values.
    pub fn new(b2b_token: impl Into<String>, bc_graphql_token: impl Into<String>) -> Self {
        Self {
            b2b_token: b2b_token.into(),
            bc_graphql_token: bc_graphql_token.into(),
        }
    }

    /// Load tokens from environment variables.
    ///
    /// Optional:
    /// - `B3_B2B_TOKEN`
    /// - `BC_GRAPHQL_TOKEN`
    ///
    /// Missing variables leave the corresponding token empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load tokens through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            b2b_token: lookup("B3_B2B_TOKEN").unwrap_or_default(),
            bc_graphql_token: lookup("BC_GRAPHQL_TOKEN").unwrap_or_default(),
        }
    }

    /// Returns true if a first-party token is present.
    pub fn has_b2b_token(&self) -> bool {
        !self.b2b_token.is_empty()
    }
}

/// Shared, application-owned holder of the current [`SessionTokens`].
///
/// Cloning the store yields another handle to the same tokens. The
/// dispatcher only reads snapshots; the application updates the tokens
/// after login, logout or refresh.
#[derive(Clone, Default)]
pub struct SessionStore {
    tokens: Arc<RwLock<SessionTokens>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("tokens", &self.snapshot())
            .finish()
    }
}

impl SessionStore {
    pub fn new(tokens: SessionTokens) -> Self {
        Self {
            tokens: Arc::new(RwLock::new(tokens)),
        }
    }

    /// A copy of the current tokens.
    pub fn snapshot(&self) -> SessionTokens {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn b2b_token(&self) -> String {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .b2b_token
            .clone()
    }

    pub fn bc_graphql_token(&self) -> String {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .bc_graphql_token
            .clone()
    }

    /// Mutate the tokens in place.
    pub fn update(&self, f: impl FnOnce(&mut SessionTokens)) {
        let mut guard = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard);
        debug!(logged_in = guard.has_b2b_token(), "Session tokens updated");
    }

    /// Replace all tokens.
    pub fn replace(&self, tokens: SessionTokens) {
        self.update(|current| *current = tokens);
    }

    /// Forget all tokens (logout).
    pub fn clear(&self) {
        self.replace(SessionTokens::default());
    }
}
