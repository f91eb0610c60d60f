#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use b3_storefront::auth::{SessionStore, SessionTokens, StoreIdentity, StorefrontConfig};
use b3_storefront::request::{Dispatcher, DispatcherBuilder, Navigator, Notifier};
use wiremock::MockServer;

pub const B2B_TOKEN: &str = "b2b-token";
pub const BC_TOKEN: &str = "bc-token";
pub const STORE_HASH: &str = "abc123";
pub const CHANNEL_ID: &str = "1";

/// Config pointing both APIs at mock servers.
pub fn config(api: &MockServer, storefront: &MockServer) -> StorefrontConfig {
    StorefrontConfig::new(
        api.uri(),
        storefront.uri(),
        StoreIdentity::new(STORE_HASH, CHANNEL_ID),
    )
    .expect("mock server URIs are valid")
}

pub fn session(b2b_token: &str) -> SessionStore {
    SessionStore::new(SessionTokens::new(b2b_token, BC_TOKEN))
}

/// Builder with the default HTTP transport and a logged-in session.
pub fn builder(api: &MockServer, storefront: &MockServer) -> DispatcherBuilder {
    Dispatcher::builder(config(api, storefront)).session(session(B2B_TOKEN))
}

#[derive(Default)]
pub struct Notifications(pub Mutex<Vec<String>>);

impl Notifications {
    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Notifier that records into a shared list.
#[derive(Clone, Default)]
pub struct SharedNotifier(pub Arc<Notifications>);

impl Notifier for SharedNotifier {
    fn error(&self, message: &str) {
        self.0 .0.lock().unwrap().push(message.to_string());
    }
}

/// Navigator holding a hash route in memory.
#[derive(Clone)]
pub struct MemoryNavigator(pub Arc<Mutex<String>>);

impl MemoryNavigator {
    pub fn at(hash: &str) -> Self {
        Self(Arc::new(Mutex::new(hash.to_string())))
    }

    pub fn hash(&self) -> String {
        self.0.lock().unwrap().clone()
    }
}

impl Navigator for MemoryNavigator {
    fn current_hash(&self) -> String {
        self.hash()
    }

    fn navigate(&self, href: &str) {
        *self.0.lock().unwrap() = href.to_string();
    }
}
