//! Side-effect capabilities the dispatcher needs from the UI shell.

use tracing::{debug, warn};

/// Route the user is sent to when the session expires.
pub const LOGIN_ROUTE: &str = "#/login?loginFlag=loggedOutLogin&showTip=false";

/// Fire-and-forget channel for user-visible error messages.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Access to the hash route of the hosting page.
pub trait Navigator: Send + Sync {
    /// Current hash route, e.g. `#/quotes`. Empty when there is none.
    fn current_hash(&self) -> String;

    /// Replace the current location with `href`.
    fn navigate(&self, href: &str);
}

/// Notifier that only logs. Default for headless callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        warn!(message, "User-facing error");
    }
}

/// Navigator for callers without a hash route; never redirects.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessNavigator;

impl Navigator for HeadlessNavigator {
    fn current_hash(&self) -> String {
        String::new()
    }

    fn navigate(&self, href: &str) {
        debug!(href, "Navigation requested without a route to change");
    }
}
