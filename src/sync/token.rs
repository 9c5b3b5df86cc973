//! Token pair relayed to the set-cookies endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Access and refresh tokens owned by the caller's session manager.
///
/// Values are opaque and forwarded as-is; nothing here validates or inspects
/// them. `Debug` output is redacted so tokens never end up in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    access_token: String,
    refresh_token: String,
}

impl TokenPair {
    /// Creates a token pair.
    #[must_use]
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Returns the access token (sensitive, never log).
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the refresh token (sensitive, never log).
    #[must_use]
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// True when either token is the empty string.
    #[must_use]
    pub fn has_empty_token(&self) -> bool {
        self.access_token.is_empty() || self.refresh_token.is_empty()
    }
}

// Custom Debug impl that redacts both tokens.
impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}
