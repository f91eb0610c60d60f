//! `reqwest`-backed transport.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{FormPart, MultipartForm, OutboundRequest, RequestBody};
use crate::transport::Transport;

/// Longest slice of an error response body kept in [`ErrorKind::Http`].
const MAX_ERROR_BODY: usize = 512;

/// HTTP transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let builder = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.idle_timeout)
            .pool_max_idle_per_host(config.max_idle_per_host)
            .user_agent(&config.user_agent)
            .gzip(config.compression)
            .deflate(config.compression);

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new transport with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn build(&self, request: OutboundRequest) -> Result<reqwest::RequestBuilder> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), &request.url);

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req = match body {
                RequestBody::Json(value) => req.body(serde_json::to_vec(&value)?),
                RequestBody::Multipart(form) => req.multipart(to_reqwest_form(form)?),
            };
        }

        Ok(req)
    }
}

fn to_reqwest_form(form: MultipartForm) -> Result<reqwest::multipart::Form> {
    let mut out = reqwest::multipart::Form::new();
    for (name, part) in form.parts {
        out = match part {
            FormPart::Text(value) => out.text(name, value),
            FormPart::File {
                bytes,
                file_name,
                mime,
            } => {
                let mut part = reqwest::multipart::Part::bytes(bytes.to_vec()).file_name(file_name);
                if let Some(mime) = mime {
                    part = part.mime_str(&mime)?;
                }
                out.part(name, part)
            }
        };
    }
    Ok(out)
}

/// Parse a response body, treating an empty body as JSON `null`.
fn parse_body(bytes: &[u8]) -> Result<serde_json::Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::Value::Null);
    }
    Ok(serde_json::from_slice(bytes)?)
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn fetch(&self, request: OutboundRequest) -> Result<serde_json::Value> {
        if self.config.log_traffic {
            debug!(
                method = %request.method,
                url = %request.url,
                "Sending request"
            );
        }

        let response = self.build(request)?.send().await?;
        let status = response.status();

        if self.config.log_traffic {
            let content_length = response.content_length();
            if status.is_success() {
                debug!(status = status.as_u16(), content_length, "Response received");
            } else {
                info!(status = status.as_u16(), content_length, "Non-success response");
            }
        }

        let bytes = response.bytes().await?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes);
            let message = if text.trim().is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                text.chars().take(MAX_ERROR_BODY).collect()
            };
            return Err(Error::new(ErrorKind::Http {
                status: status.as_u16(),
                message,
            }));
        }

        parse_body(&bytes)
    }
}
