//! The `fetch`-like boundary the dispatcher sends every call through.

use async_trait::async_trait;

use crate::error::Result;
use crate::request::OutboundRequest;

/// Sends an [`OutboundRequest`] and yields the parsed JSON response body.
///
/// Implementations own their retry, redirect and timeout policy. An empty
/// response body is reported as `serde_json::Value::Null`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, request: OutboundRequest) -> Result<serde_json::Value>;
}
