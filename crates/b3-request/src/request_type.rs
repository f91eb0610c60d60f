//! Request-type tags.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

/// Which backend and authentication scheme a call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    /// First-party B2B REST API.
    B2BRest,
    /// Storefront REST API on the current origin.
    BCRest,
    /// First-party B2B GraphQL API.
    B2BGraphql,
    /// Storefront GraphQL API.
    BCGraphql,
    /// Storefront GraphQL API reached through the first-party proxy.
    BCProxyGraphql,
}

impl RequestType {
    /// All tags, in declaration order.
    pub const ALL: [RequestType; 5] = [
        RequestType::B2BRest,
        RequestType::BCRest,
        RequestType::B2BGraphql,
        RequestType::BCGraphql,
        RequestType::BCProxyGraphql,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::B2BRest => "B2BRest",
            RequestType::BCRest => "BCRest",
            RequestType::B2BGraphql => "B2BGraphql",
            RequestType::BCGraphql => "BCGraphql",
            RequestType::BCProxyGraphql => "BCProxyGraphql",
        }
    }

    pub fn is_graphql(&self) -> bool {
        matches!(
            self,
            RequestType::B2BGraphql | RequestType::BCGraphql | RequestType::BCProxyGraphql
        )
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| Error::new(ErrorKind::InvalidRequestType(s.to_string())))
    }
}
