//! Request-type to URL resolution.

use b3_storefront_auth::StorefrontConfig;

use crate::error::{Error, ErrorKind, Result};
use crate::request_type::RequestType;

/// Path of the first-party proxy in front of the storefront GraphQL API.
const PROXY_GRAPHQL_PATH: &str = "/api/v3/proxy/bc-storefront/graphql";

/// Maps request types to base URLs. Pure: no I/O, no shared state.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    api_base_url: String,
    storefront_api_base_url: String,
}

impl EndpointResolver {
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            api_base_url: config.api_base_url().to_string(),
            storefront_api_base_url: config.storefront_api_base_url().to_string(),
        }
    }

    /// GraphQL endpoint for a GraphQL request type.
    ///
    /// REST types have no GraphQL endpoint and yield
    /// [`ErrorKind::NoGraphqlEndpoint`].
    pub fn graphql_endpoint(&self, ty: RequestType) -> Result<String> {
        match ty {
            RequestType::B2BGraphql => Ok(format!("{}/graphql", self.api_base_url)),
            RequestType::BCGraphql => Ok(format!("{}/graphql", self.storefront_api_base_url)),
            RequestType::BCProxyGraphql => {
                Ok(format!("{}{}", self.api_base_url, PROXY_GRAPHQL_PATH))
            }
            RequestType::B2BRest | RequestType::BCRest => {
                Err(Error::new(ErrorKind::NoGraphqlEndpoint(ty)))
            }
        }
    }

    /// REST URL for `path`: prefixed with the API base for `B2BRest`,
    /// returned unchanged for every other type.
    pub fn rest_url(&self, path: &str, ty: RequestType) -> String {
        match ty {
            RequestType::B2BRest => self.api_url(path),
            _ => path.to_string(),
        }
    }

    /// `path` on the first-party API.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
