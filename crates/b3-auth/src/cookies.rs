//! Cookie access for the storefront CSRF token.

use std::collections::HashMap;

/// Name of the cookie carrying the storefront CSRF token.
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";

/// Read access to the cookies of the current storefront session.
pub trait CookieStore: Send + Sync {
    /// Current value of the named cookie, if set.
    fn get(&self, name: &str) -> Option<String>;
}

/// Fixed set of cookies, e.g. parsed once from a `Cookie` header.
#[derive(Clone, Default)]
pub struct StaticCookies {
    cookies: HashMap<String, String>,
}

impl std::fmt::Debug for StaticCookies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.cookies.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("StaticCookies")
            .field("names", &names)
            .finish_non_exhaustive()
    }
}

impl StaticCookies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a cookie.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Parse a `Cookie` request header (`a=1; b=2`).
    ///
    /// Pairs without `=` are ignored; surrounding whitespace is trimmed.
    pub fn from_header(header: &str) -> Self {
        let cookies = header
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some((name.to_string(), value.trim().to_string()))
            })
            .collect();
        Self { cookies }
    }
}

impl CookieStore for StaticCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_header() {
        let cookies = StaticCookies::from_header("SHOP_SESSION=abc; XSRF-TOKEN=tok123 ; junk; =x");
        assert_eq!(cookies.get(XSRF_COOKIE), Some("tok123".to_string()));
        assert_eq!(cookies.get("SHOP_SESSION"), Some("abc".to_string()));
        assert_eq!(cookies.get("junk"), None);
    }

    #[test]
    fn test_builder_and_missing_cookie() {
        let cookies = StaticCookies::new().with(XSRF_COOKIE, "v");
        assert_eq!(cookies.get(XSRF_COOKIE), Some("v".to_string()));
        assert_eq!(StaticCookies::new().get(XSRF_COOKIE), None);
    }

    #[test]
    fn test_debug_hides_values() {
        let cookies = StaticCookies::new().with(XSRF_COOKIE, "secret-csrf");
        let debug_output = format!("{cookies:?}");
        assert!(debug_output.contains(XSRF_COOKIE));
        assert!(!debug_output.contains("secret-csrf"));
    }
}
