//! Static storefront configuration: base URLs, store identity and the
//! optional alternate-host settings.

use crate::error::{Error, ErrorKind, Result};

/// Identifiers of the store and sales channel the storefront runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreIdentity {
    pub store_hash: String,
    pub channel_id: String,
}

impl StoreIdentity {
    pub fn new(store_hash: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            store_hash: store_hash.into(),
            channel_id: channel_id.into(),
        }
    }
}

/// Base URLs of the backends the storefront talks to, validated once.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    api_base_url: String,
    storefront_api_base_url: String,
    identity: StoreIdentity,
}

impl StorefrontConfig {
    /// Create a configuration, checking that both base URLs are absolute.
    ///
    /// Trailing slashes are trimmed so paths can be appended verbatim.
    pub fn new(
        api_base_url: impl Into<String>,
        storefront_api_base_url: impl Into<String>,
        identity: StoreIdentity,
    ) -> Result<Self> {
        let api_base_url = normalize_base("apiBaseUrl", api_base_url.into())?;
        let storefront_api_base_url =
            normalize_base("storefrontApiBaseUrl", storefront_api_base_url.into())?;

        Ok(Self {
            api_base_url,
            storefront_api_base_url,
            identity,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `B3_API_BASE_URL`
    /// - `BC_STOREFRONT_API_BASE_URL`
    /// - `B3_STORE_HASH`
    ///
    /// Optional:
    /// - `B3_CHANNEL_ID` (default: "1")
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::new(ErrorKind::EnvVar(key.to_string())))
        };

        let api_base_url = required("B3_API_BASE_URL")?;
        let storefront_api_base_url = required("BC_STOREFRONT_API_BASE_URL")?;
        let store_hash = required("B3_STORE_HASH")?;
        let channel_id = lookup("B3_CHANNEL_ID")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "1".to_string());

        Self::new(
            api_base_url,
            storefront_api_base_url,
            StoreIdentity::new(store_hash, channel_id),
        )
    }

    /// First-party B2B API base URL.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Storefront commerce API base URL.
    pub fn storefront_api_base_url(&self) -> &str {
        &self.storefront_api_base_url
    }

    pub fn identity(&self) -> &StoreIdentity {
        &self.identity
    }
}

fn normalize_base(name: &'static str, raw: String) -> Result<String> {
    url::Url::parse(&raw).map_err(|e| {
        Error::with_source(
            ErrorKind::InvalidUrl {
                name,
                reason: e.to_string(),
            },
            e,
        )
    })?;
    Ok(raw.trim_end_matches('/').to_string())
}

/// Settings for alternate-host mode, as supplied by the embedding page.
///
/// Every value is optional here; [`AlternateHostConfig::validate`] checks
/// them when alternate-host mode is actually requested.
#[derive(Clone, Default)]
pub struct AlternateHostConfig {
    pub secret_key: Option<String>,
    pub url: Option<String>,
    pub customer_id: Option<String>,
}

impl std::fmt::Debug for AlternateHostConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlternateHostConfig")
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .field("url", &self.url)
            .field("customer_id", &self.customer_id)
            .finish()
    }
}

impl AlternateHostConfig {
    pub fn new(
        secret_key: impl Into<String>,
        url: impl Into<String>,
        customer_id: impl Into<String>,
    ) -> Self {
        Self {
            secret_key: Some(secret_key.into()),
            url: Some(url.into()),
            customer_id: Some(customer_id.into()),
        }
    }

    /// Load settings from environment variables.
    ///
    /// Optional:
    /// - `B3_ALT_SECRET_KEY`
    /// - `B3_ALT_URL`
    /// - `B3_ALT_CUSTOMER_ID`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            secret_key: lookup("B3_ALT_SECRET_KEY"),
            url: lookup("B3_ALT_URL"),
            customer_id: lookup("B3_ALT_CUSTOMER_ID"),
        }
    }

    /// Check that all three values are present and non-empty.
    ///
    /// The error names the first missing value: `secretKey`, `url` or
    /// `customerID`.
    pub fn validate(&self) -> Result<AlternateHost> {
        fn present(value: &Option<String>, name: &'static str) -> Result<String> {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or_else(|| Error::new(ErrorKind::MissingValue(name)))
        }

        Ok(AlternateHost {
            secret_key: present(&self.secret_key, "secretKey")?,
            url: present(&self.url, "url")?,
            customer_id: present(&self.customer_id, "customerID")?,
        })
    }
}

/// Validated alternate-host settings.
#[derive(Clone)]
pub struct AlternateHost {
    secret_key: String,
    url: String,
    customer_id: String,
}

impl std::fmt::Debug for AlternateHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlternateHost")
            .field("secret_key", &"[REDACTED]")
            .field("url", &self.url)
            .field("customer_id", &self.customer_id)
            .finish()
    }
}

impl AlternateHost {
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Alternate base URL with the caller's sub-path appended verbatim.
    pub fn target(&self, sub_path: &str) -> String {
        format!("{}{}", self.url, sub_path)
    }
}
