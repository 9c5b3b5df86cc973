//! User-Agent string for cookie sync traffic.

/// Project URL for User-Agent identification (RFC 9308).
const PROJECT_UA_URL: &str = "https://github.com/fierce/cookie-sync";

/// Default User-Agent for backend requests (identifies the tool and version).
#[must_use]
pub(crate) fn default_sync_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("cookie-sync/{version} (+{PROJECT_UA_URL})")
}
