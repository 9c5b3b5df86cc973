//! Backend endpoint configuration.
//!
//! The base URL is resolved once (usually at process start) and injected into
//! [`CookieSyncClient`](crate::CookieSyncClient). Nothing in the sync path reads
//! the environment on its own.

use std::fmt;

use thiserror::Error;
use tracing::debug;
use url::Url;

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "COOKIE_SYNC_API_URL";

/// Origin used when [`BASE_URL_ENV`] is unset or empty.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the endpoint that mirrors tokens into HttpOnly cookies.
pub const SET_COOKIES_PATH: &str = "/auth/set-cookies";

/// Path of the endpoint that clears server-managed cookies.
pub const LOGOUT_PATH: &str = "/auth/logout";

/// Errors raised while building an [`EndpointConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL (or an endpoint derived from it) does not parse.
    #[error("invalid backend base URL '{value}': {source}")]
    InvalidBaseUrl {
        /// The rejected value.
        value: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The base URL parses but cannot carry an HTTP request.
    #[error("backend base URL '{value}' must use http or https")]
    UnsupportedScheme {
        /// The rejected value.
        value: String,
    },

    /// Endpoint paths are appended to the base URL, so it cannot end in a
    /// query string or fragment.
    #[error("backend base URL '{value}' must not contain a query string or fragment")]
    QueryOrFragment {
        /// The rejected value.
        value: String,
    },
}

/// Resolved backend endpoints. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    base_url: String,
    set_cookies_url: Url,
    logout_url: Url,
}

impl EndpointConfig {
    /// Builds a configuration from an explicit base URL.
    ///
    /// Trailing slashes are dropped before endpoint paths are appended, and any
    /// path prefix on the base URL (e.g. `https://api.example.com/v1`) is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the URL does not parse, is not http(s), or
    /// carries a query string or fragment.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                value: base_url.to_string(),
            });
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::QueryOrFragment {
                value: base_url.to_string(),
            });
        }

        let set_cookies_url = endpoint(trimmed, SET_COOKIES_PATH)?;
        let logout_url = endpoint(trimmed, LOGOUT_PATH)?;

        Ok(Self {
            base_url: trimmed.to_string(),
            set_cookies_url,
            logout_url,
        })
    }

    /// Resolves the configuration from [`BASE_URL_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the variable is set to an unusable URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration through an injected variable lookup.
    ///
    /// An unset or empty value falls back to [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the looked-up value is an unusable URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
            Some(value) => {
                debug!(env = BASE_URL_ENV, base_url = %value, "Using configured backend base URL");
                Self::new(&value)
            }
            None => {
                debug!(base_url = DEFAULT_BASE_URL, "Backend base URL unset; using default");
                Self::new(DEFAULT_BASE_URL)
            }
        }
    }

    /// The normalized base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the set-cookies endpoint.
    #[must_use]
    pub fn set_cookies_url(&self) -> &Url {
        &self.set_cookies_url
    }

    /// Full URL of the logout endpoint.
    #[must_use]
    pub fn logout_url(&self) -> &Url {
        &self.logout_url
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        // DEFAULT_BASE_URL is a constant known to parse.
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            set_cookies_url: default_endpoint(SET_COOKIES_PATH),
            logout_url: default_endpoint(LOGOUT_PATH),
        }
    }
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn endpoint(base: &str, path: &str) -> Result<Url, ConfigError> {
    let joined = format!("{base}{path}");
    Url::parse(&joined).map_err(|source| ConfigError::InvalidBaseUrl {
        value: base.to_string(),
        source,
    })
}

#[allow(clippy::expect_used)]
fn default_endpoint(path: &str) -> Url {
    endpoint(DEFAULT_BASE_URL, path).expect("default base URL is a valid constant")
}
