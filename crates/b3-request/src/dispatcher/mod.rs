//! The request dispatcher.
//!
//! `Dispatcher` holds the transport, the endpoint resolver, read handles to
//! the session and cookies, and the UI capabilities. REST verbs live in
//! `rest.rs`, GraphQL operations in `graphql.rs`.

use std::sync::Arc;

use b3_storefront_auth::{
    AlternateHostConfig, CookieStore, SessionStore, StaticCookies, StoreIdentity, StorefrontConfig,
};
use b3_storefront_client::{HttpTransport, OutboundRequest, Transport};
use serde::de::DeserializeOwned;

use crate::endpoint::EndpointResolver;
use crate::error::Result;
use crate::ui::{HeadlessNavigator, Navigator, Notifier, TracingNotifier};

mod graphql;
mod rest;

pub use graphql::GraphqlOptions;

/// What a GraphQL call does after the session-expired redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionExpiryPolicy {
    /// Fail the call with [`ErrorKind::SessionExpired`](crate::ErrorKind::SessionExpired).
    #[default]
    Fail,
    /// Never complete the call, leaving the caller suspended until the
    /// future is dropped. Matches the legacy storefront.
    Stall,
}

/// Routes REST and GraphQL calls to the right backend with the right
/// credentials.
///
/// Cheap to clone; clones share the transport, session and capabilities.
/// The dispatcher never writes to the session store.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    resolver: EndpointResolver,
    identity: StoreIdentity,
    session: SessionStore,
    cookies: Arc<dyn CookieStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    alternate_host: AlternateHostConfig,
    session_expiry: SessionExpiryPolicy,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("resolver", &self.resolver)
            .field("identity", &self.identity)
            .field("session", &self.session)
            .field("alternate_host", &self.alternate_host)
            .field("session_expiry", &self.session_expiry)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Start building a dispatcher for the given configuration.
    pub fn builder(config: StorefrontConfig) -> DispatcherBuilder {
        DispatcherBuilder::new(config)
    }

    /// Dispatcher with the default HTTP transport and headless capabilities.
    pub fn new(config: StorefrontConfig, session: SessionStore) -> Result<Self> {
        Self::builder(config).session(session).build()
    }

    /// Get the endpoint resolver.
    pub fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }

    /// Get the session handle.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Forward a request to the transport and deserialize the body.
    async fn send<T: DeserializeOwned>(&self, request: OutboundRequest) -> Result<T> {
        let body = self.transport.fetch(request).await?;
        Ok(serde_json::from_value(body)?)
    }
}

/// Builder for [`Dispatcher`].
pub struct DispatcherBuilder {
    config: StorefrontConfig,
    transport: Option<Arc<dyn Transport>>,
    session: SessionStore,
    cookies: Arc<dyn CookieStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    alternate_host: AlternateHostConfig,
    session_expiry: SessionExpiryPolicy,
}

impl DispatcherBuilder {
    fn new(config: StorefrontConfig) -> Self {
        Self {
            config,
            transport: None,
            session: SessionStore::default(),
            cookies: Arc::new(StaticCookies::default()),
            notifier: Arc::new(TracingNotifier),
            navigator: Arc::new(HeadlessNavigator),
            alternate_host: AlternateHostConfig::default(),
            session_expiry: SessionExpiryPolicy::default(),
        }
    }

    /// Use a custom transport instead of the default `HttpTransport`.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Use a shared transport.
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Session tokens handle (shared with the application).
    pub fn session(mut self, session: SessionStore) -> Self {
        self.session = session;
        self
    }

    /// Cookie source for the storefront CSRF token.
    pub fn cookies(mut self, cookies: impl CookieStore + 'static) -> Self {
        self.cookies = Arc::new(cookies);
        self
    }

    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    pub fn navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Arc::new(navigator);
        self
    }

    /// Settings for alternate-host mode.
    pub fn alternate_host(mut self, config: AlternateHostConfig) -> Self {
        self.alternate_host = config;
        self
    }

    pub fn session_expiry(mut self, policy: SessionExpiryPolicy) -> Self {
        self.session_expiry = policy;
        self
    }

    /// Build the dispatcher, creating the default HTTP transport if none
    /// was supplied.
    pub fn build(self) -> Result<Dispatcher> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::default_client()?),
        };

        Ok(Dispatcher {
            transport,
            resolver: EndpointResolver::new(&self.config),
            identity: self.config.identity().clone(),
            session: self.session,
            cookies: self.cookies,
            notifier: self.notifier,
            navigator: self.navigator,
            alternate_host: self.alternate_host,
            session_expiry: self.session_expiry,
        })
    }
}
