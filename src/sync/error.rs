//! Error types for the sync module.
//!
//! [`SyncError`] describes why a sync or logout call failed. These errors are
//! absorbed by [`run_best_effort`](super::run_best_effort) and only ever reach
//! the logs; [`ClientError`] covers client construction and does propagate.

use thiserror::Error;

/// Placeholder detail used when a rejection body carries no readable `detail`.
pub const UNKNOWN_ERROR_DETAIL: &str = "Unknown error";

/// Failure of a single request to the cookie backend.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Network-level failure (DNS, connection refused, TLS, timeout).
    #[error("transport failure calling {url}: {source}")]
    Transport {
        /// The endpoint that could not be reached.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("backend rejected {url} with HTTP {status}: {detail}")]
    BackendRejection {
        /// The endpoint that rejected the call.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// Parsed `detail` from the response body, or [`UNKNOWN_ERROR_DETAIL`].
        detail: String,
    },
}

impl SyncError {
    /// Creates a transport error from a reqwest error.
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Creates a backend rejection error.
    pub fn backend_rejection(url: impl Into<String>, status: u16, detail: impl Into<String>) -> Self {
        Self::BackendRejection {
            url: url.into(),
            status,
            detail: detail.into(),
        }
    }

    /// Short machine-friendly label for log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport_failure",
            Self::BackendRejection { .. } => "backend_rejection",
        }
    }

    /// Human-readable detail for the warning log entry.
    ///
    /// Transport details include the whole cause chain (e.g. the refused
    /// connection or failed DNS lookup behind reqwest's summary).
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Transport { source, .. } => {
                let mut message = source.to_string();
                let mut cause = std::error::Error::source(source);
                while let Some(inner) = cause {
                    message.push_str(": ");
                    message.push_str(&inner.to_string());
                    cause = std::error::Error::source(inner);
                }
                message
            }
            Self::BackendRejection { detail, .. } => detail.clone(),
        }
    }

    /// HTTP status, when the backend answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { .. } => None,
            Self::BackendRejection { status, .. } => Some(*status),
        }
    }
}

/// Errors raised while constructing a [`CookieSyncClient`](super::CookieSyncClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}
