use b3_storefront_client::{OutboundRequest, RequestMethod};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::SessionExpiryPolicy;
use crate::error::{Error, ErrorKind, Result};
use crate::graphql::{GraphqlOutcome, GraphqlRequest, GraphqlResponse};
use crate::request_type::RequestType;
use crate::ui::LOGIN_ROUTE;

/// Per-call options for [`Dispatcher::graphql_b2b`](super::Dispatcher::graphql_b2b).
#[derive(Debug, Clone, Default)]
pub struct GraphqlOptions {
    suppress_error_notification: bool,
    alternate_host_path: Option<String>,
}

impl GraphqlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on GraphQL errors without notifying the user; the caller shows
    /// its own message.
    pub fn suppress_error_notification(mut self) -> Self {
        self.suppress_error_notification = true;
        self
    }

    /// Send the call to the alternate host, at `path` below its base URL.
    pub fn alternate_host(mut self, path: impl Into<String>) -> Self {
        self.alternate_host_path = Some(path.into());
        self
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

impl super::Dispatcher {
    /// GraphQL call to the first-party API with the B2B bearer token.
    ///
    /// In alternate-host mode the alternate-host settings are validated
    /// before anything is sent; a missing value fails the call with a
    /// configuration error naming it.
    #[instrument(skip(self, request, options), fields(alternate_host = options.alternate_host_path.is_some()))]
    pub async fn graphql_b2b<T: DeserializeOwned>(
        &self,
        request: &GraphqlRequest,
        options: &GraphqlOptions,
    ) -> Result<T> {
        let endpoint = self.resolver.graphql_endpoint(RequestType::B2BGraphql)?;
        let authorization = bearer(&self.session.b2b_token());

        let outbound = match &options.alternate_host_path {
            Some(path) => {
                let host = self.alternate_host.validate().map_err(|err| {
                    warn!(error = %err, "Alternate host is not configured");
                    Error::from(err)
                })?;
                OutboundRequest::new(RequestMethod::Post, host.target(path))
                    .header("Authorization", authorization)
                    .header("a1-secret-key", host.secret_key())
                    .header("bcCustomerId", host.customer_id())
                    .json_value(request.to_json_with_bundle_url(&endpoint)?)
            }
            None => OutboundRequest::new(RequestMethod::Post, endpoint)
                .header("Authorization", authorization)
                .json(request)?,
        };

        self.graphql_call(outbound, options.suppress_error_notification)
            .await
    }

    /// GraphQL call to the storefront API with the storefront token.
    #[instrument(skip(self, request))]
    pub async fn graphql_bc<T: DeserializeOwned>(&self, request: &GraphqlRequest) -> Result<T> {
        let endpoint = self.resolver.graphql_endpoint(RequestType::BCGraphql)?;
        let outbound = OutboundRequest::new(RequestMethod::Post, endpoint)
            .header("Authorization", bearer(&self.session.bc_graphql_token()))
            .json(request)?;

        self.graphql_call(outbound, false).await
    }

    /// GraphQL call to the storefront API through the first-party proxy.
    ///
    /// Uses the B2B bearer token when logged in; anonymous callers are
    /// identified by store hash and channel id instead.
    #[instrument(skip(self, request))]
    pub async fn graphql_bc_proxy<T: DeserializeOwned>(
        &self,
        request: &GraphqlRequest,
    ) -> Result<T> {
        let endpoint = self.resolver.graphql_endpoint(RequestType::BCProxyGraphql)?;
        let token = self.session.b2b_token();
        let outbound = OutboundRequest::new(RequestMethod::Post, endpoint);

        let outbound = if token.is_empty() {
            outbound
                .header("Store-Hash", self.identity.store_hash.as_str())
                .header("BC-Channel-Id", self.identity.channel_id.as_str())
        } else {
            outbound.header("Authorization", bearer(&token))
        };

        self.graphql_call(outbound.json(request)?, false).await
    }

    /// Send a GraphQL request and apply the response policy.
    async fn graphql_call<T: DeserializeOwned>(
        &self,
        request: OutboundRequest,
        suppress_error_notification: bool,
    ) -> Result<T> {
        let body = self.transport.fetch(request).await?;
        let response: GraphqlResponse = serde_json::from_value(body)?;

        match response.into_outcome() {
            GraphqlOutcome::Data(data) => Ok(serde_json::from_value(data)?),
            GraphqlOutcome::SessionExpired { message } => {
                warn!("GraphQL session expired");
                if self.navigator.current_hash().starts_with("#/") {
                    self.navigator.navigate(LOGIN_ROUTE);
                }
                if let Some(message) = &message {
                    self.notifier.error(message);
                }

                match self.session_expiry {
                    SessionExpiryPolicy::Fail => {
                        Err(Error::new(ErrorKind::SessionExpired { message }))
                    }
                    SessionExpiryPolicy::Stall => {
                        debug!("Stalling call after session expiry");
                        std::future::pending().await
                    }
                }
            }
            GraphqlOutcome::Failed { message, code } => {
                warn!(code, message = %message, "GraphQL error");
                if !suppress_error_notification {
                    self.notifier.error(&message);
                }
                Err(Error::new(ErrorKind::Graphql { message, code }))
            }
        }
    }
}
