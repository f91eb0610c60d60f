//! GraphQL request and response envelopes.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Extension code the backend uses to signal an expired session.
pub const SESSION_EXPIRED_CODE: i64 = 40101;

/// A GraphQL operation: `{ query, variables? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
}

impl GraphqlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    /// Attach variables serialized from `variables`.
    pub fn with_variables<V: Serialize>(mut self, variables: &V) -> Result<Self> {
        self.variables = Some(serde_json::to_value(variables)?);
        Ok(self)
    }

    /// JSON body with an extra `bundleUrl` field, used in alternate-host mode.
    pub(crate) fn to_json_with_bundle_url(&self, bundle_url: &str) -> Result<serde_json::Value> {
        let mut body = serde_json::to_value(self)?;
        if let Some(object) = body.as_object_mut() {
            object.insert(
                "bundleUrl".to_string(),
                serde_json::Value::String(bundle_url.to_string()),
            );
        }
        Ok(body)
    }
}

/// Response envelope: `{ data, errors? }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

/// One entry of the `errors` array.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphqlError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub extensions: Option<ErrorExtensions>,
}

/// `extensions` of a GraphQL error.
///
/// `code` is kept as raw JSON because backends send it as a number or,
/// occasionally, as a string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorExtensions {
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

impl GraphqlError {
    /// Numeric extension code. Integral floats (`40101.0`) count as
    /// integers; string codes never match a number.
    pub fn code(&self) -> Option<i64> {
        let code = self.extensions.as_ref()?.code.as_ref()?;
        code.as_i64().or_else(|| {
            code.as_f64()
                .filter(|value| value.fract() == 0.0 && value.abs() < i64::MAX as f64)
                .map(|value| value as i64)
        })
    }

    /// Message, treating an empty string as absent.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}

/// How a GraphQL response should be handled, decided from `errors[0]` alone.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphqlOutcome {
    /// No error message: hand `data` to the caller.
    Data(serde_json::Value),
    /// The session expired; redirect to login.
    SessionExpired { message: Option<String> },
    /// Any other error with a message.
    Failed { message: String, code: Option<i64> },
}

impl GraphqlResponse {
    pub fn first_error(&self) -> Option<&GraphqlError> {
        self.errors.as_ref()?.first()
    }

    /// Classify the response. The session-expired code wins over the
    /// message; an error without a message still yields `data`.
    pub fn into_outcome(self) -> GraphqlOutcome {
        let (message, code) = match self.first_error() {
            Some(error) => (error.message().map(str::to_string), error.code()),
            None => (None, None),
        };

        if code == Some(SESSION_EXPIRED_CODE) {
            return GraphqlOutcome::SessionExpired { message };
        }

        match message {
            Some(message) => GraphqlOutcome::Failed { message, code },
            None => GraphqlOutcome::Data(self.data),
        }
    }
}
