//! HTTP client that mirrors tokens into backend-managed cookies.
//!
//! The backend sets HttpOnly cookies that script code could never set itself.
//! This client relays the tokens and asks for the cookies to be cleared on
//! logout. Every call is best-effort: see [`run_best_effort`].

use std::sync::Arc;

use reqwest::Client;
use reqwest::cookie::Jar;
use serde::Deserialize;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use super::best_effort::{COMPONENT, Operation, run_best_effort};
use super::error::{ClientError, SyncError, UNKNOWN_ERROR_DETAIL};
use super::token::TokenPair;
use crate::config::EndpointConfig;
use crate::user_agent;

/// Failure payload returned by the backend on a non-success status.
///
/// `detail` is usually a string but validation failures carry a list.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Stateless adapter for the `/auth/set-cookies` and `/auth/logout` endpoints.
///
/// Credentials are included on every request through a shared cookie jar:
/// cookies already in the jar are sent, and cookies the backend sets land in
/// it. The client is cheap to clone; clones share the connection pool and jar.
///
/// # Example
///
/// ```no_run
/// use cookie_sync::{CookieSyncClient, EndpointConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CookieSyncClient::new(EndpointConfig::from_env()?)?;
/// client.sync_tokens("access", "refresh").await;
/// client.clear_cookies().await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CookieSyncClient {
    client: Client,
    cookie_jar: Arc<Jar>,
    endpoints: EndpointConfig,
}

impl CookieSyncClient {
    /// Creates a client with a fresh cookie jar.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] if the HTTP client cannot be constructed.
    pub fn new(endpoints: EndpointConfig) -> Result<Self, ClientError> {
        Self::with_cookie_jar(endpoints, Arc::new(Jar::default()))
    }

    /// Creates a client that shares `cookie_jar` with other HTTP clients.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] if the HTTP client cannot be constructed.
    #[instrument(level = "debug", skip(cookie_jar))]
    pub fn with_cookie_jar(
        endpoints: EndpointConfig,
        cookie_jar: Arc<Jar>,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(user_agent::default_sync_user_agent())
            .cookie_provider(Arc::clone(&cookie_jar))
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self {
            client,
            cookie_jar,
            endpoints,
        })
    }

    /// Endpoints this client talks to.
    #[must_use]
    pub fn endpoints(&self) -> &EndpointConfig {
        &self.endpoints
    }

    /// Cookie jar attached to every request.
    #[must_use]
    pub fn cookie_jar(&self) -> &Arc<Jar> {
        &self.cookie_jar
    }

    /// Sends the tokens to the backend so it can set HttpOnly cookies.
    ///
    /// Never fails: transport errors and non-success statuses are logged as
    /// warnings and the call returns normally.
    pub async fn sync_tokens(&self, access_token: &str, refresh_token: &str) {
        self.sync_token_pair(&TokenPair::new(access_token, refresh_token))
            .await;
    }

    /// Same as [`sync_tokens`](Self::sync_tokens), taking a [`TokenPair`].
    pub async fn sync_token_pair(&self, tokens: &TokenPair) {
        let _ = run_best_effort(Operation::SyncTokens, self.try_sync_tokens(tokens)).await;
    }

    /// Asks the backend to clear its auth cookies.
    ///
    /// Never fails: errors are logged as warnings.
    pub async fn clear_cookies(&self) {
        let _ = run_best_effort(Operation::ClearCookies, self.try_clear_cookies()).await;
    }

    /// Schedules [`sync_token_pair`](Self::sync_token_pair) on the Tokio runtime.
    ///
    /// Awaiting the handle is optional; the task always completes normally.
    /// Must be called from within a Tokio runtime.
    pub fn spawn_sync_tokens(&self, tokens: TokenPair) -> JoinHandle<()> {
        let client = self.clone();
        tokio::spawn(async move { client.sync_token_pair(&tokens).await })
    }

    /// Schedules [`clear_cookies`](Self::clear_cookies) on the Tokio runtime.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn_clear_cookies(&self) -> JoinHandle<()> {
        let client = self.clone();
        tokio::spawn(async move { client.clear_cookies().await })
    }

    #[instrument(level = "debug", skip(self, tokens), fields(url = %self.endpoints.set_cookies_url()))]
    pub(crate) async fn try_sync_tokens(&self, tokens: &TokenPair) -> Result<(), SyncError> {
        if tokens.has_empty_token() {
            debug!(component = COMPONENT, "Syncing token pair containing an empty token");
        }

        let url = self.endpoints.set_cookies_url();
        let response = self
            .client
            .post(url.clone())
            .json(tokens)
            .send()
            .await
            .map_err(|e| SyncError::transport(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = rejection_detail(response).await;
            return Err(SyncError::backend_rejection(url.as_str(), status.as_u16(), detail));
        }

        info!(
            component = COMPONENT,
            status = status.as_u16(),
            "{COMPONENT}: tokens synced to HttpOnly cookies"
        );
        Ok(())
    }

    #[instrument(level = "debug", skip(self), fields(url = %self.endpoints.logout_url()))]
    pub(crate) async fn try_clear_cookies(&self) -> Result<(), SyncError> {
        let url = self.endpoints.logout_url();
        let response = self
            .client
            .post(url.clone())
            .send()
            .await
            .map_err(|e| SyncError::transport(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = rejection_detail(response).await;
            return Err(SyncError::backend_rejection(url.as_str(), status.as_u16(), detail));
        }

        debug!(component = COMPONENT, status = status.as_u16(), "Auth cookies cleared");
        Ok(())
    }
}

async fn rejection_detail(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(body) => parse_error_detail(&body),
        Err(error) => {
            debug!(error = %error, "Could not read rejection body");
            UNKNOWN_ERROR_DETAIL.to_string()
        }
    }
}

/// Extracts `detail` from a JSON error body.
///
/// String details are returned as-is, any other value is rendered as JSON.
/// Non-JSON bodies and bodies without `detail` yield the fallback placeholder.
fn parse_error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body).map(|parsed| parsed.detail) {
        Ok(Some(serde_json::Value::String(detail))) => detail,
        Ok(Some(serde_json::Value::Null) | None) | Err(_) => UNKNOWN_ERROR_DETAIL.to_string(),
        Ok(Some(other)) => other.to_string(),
    }
}
