//! Best-effort execution: failures are logged, never returned.
//!
//! Cookie mirroring sits on top of a primary token store that works without
//! it, so every sync and logout call goes through [`run_best_effort`].

use std::fmt;
use std::future::Future;

use tracing::warn;

use super::error::SyncError;

/// Component identifier attached to every log entry from this module.
pub const COMPONENT: &str = "CookieSync";

/// The backend call being run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `POST /auth/set-cookies`
    SyncTokens,
    /// `POST /auth/logout`
    ClearCookies,
}

impl Operation {
    /// Stable label for log fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SyncTokens => "sync_tokens",
            Self::ClearCookies => "clear_cookies",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to a best-effort operation.
#[derive(Debug)]
pub enum BestEffortOutcome {
    /// The operation finished without error.
    Completed,
    /// The operation failed; the error was logged and swallowed.
    Absorbed(SyncError),
}

impl BestEffortOutcome {
    /// True if the operation failed.
    #[must_use]
    pub fn is_absorbed(&self) -> bool {
        matches!(self, Self::Absorbed(_))
    }

    /// The swallowed error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&SyncError> {
        match self {
            Self::Completed => None,
            Self::Absorbed(error) => Some(error),
        }
    }
}

/// Runs `operation`, logging any error as a warning instead of returning it.
///
/// The returned outcome is informational. Callers that honor the silent-failure
/// contract drop it.
pub async fn run_best_effort<F>(operation: Operation, future: F) -> BestEffortOutcome
where
    F: Future<Output = Result<(), SyncError>>,
{
    match future.await {
        Ok(()) => BestEffortOutcome::Completed,
        Err(error) => {
            warn!(
                component = COMPONENT,
                operation = %operation,
                kind = error.kind(),
                status = ?error.status(),
                detail = %error.detail(),
                "{COMPONENT}: {operation} failed (non-fatal): {}",
                error.detail()
            );
            BestEffortOutcome::Absorbed(error)
        }
    }
}
