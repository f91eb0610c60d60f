//! Transport configuration.

use std::time::Duration;

/// Settings for [`HttpTransport`](crate::HttpTransport).
///
/// Defaults suit a storefront talking to two API hosts: a 30s request
/// timeout, a small idle pool per host and compressed responses.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// How long an idle pooled connection is kept.
    pub idle_timeout: Duration,
    pub max_idle_per_host: usize,
    pub user_agent: String,
    /// Accept gzip/deflate responses.
    pub compression: bool,
    /// Log each request and response status at debug level.
    pub log_traffic: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(90),
            max_idle_per_host: 4,
            user_agent: crate::USER_AGENT.to_string(),
            compression: true,
            log_traffic: true,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Idle pool settings: keep at most `max_per_host` connections for
    /// `timeout`.
    pub fn with_idle_pool(mut self, timeout: Duration, max_per_host: usize) -> Self {
        self.idle_timeout = timeout;
        self.max_idle_per_host = max_per_host;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn without_compression(mut self) -> Self {
        self.compression = false;
        self
    }

    /// Stop logging individual requests.
    pub fn quiet(mut self) -> Self {
        self.log_traffic = false;
        self
    }
}
