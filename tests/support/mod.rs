#![allow(dead_code)]

pub mod log_capture;

use cookie_sync::{CookieSyncClient, EndpointConfig};
use wiremock::MockServer;

/// Starts a mock cookie backend and a client pointed at it.
pub async fn mock_backend() -> (MockServer, CookieSyncClient) {
    let server = MockServer::start().await;
    let endpoints = EndpointConfig::new(&server.uri()).expect("mock server URI is valid");
    let client = CookieSyncClient::new(endpoints).expect("client builds");
    (server, client)
}

/// Client whose backend refuses connections (nothing listens on port 1).
pub fn unreachable_client() -> CookieSyncClient {
    let endpoints = EndpointConfig::new("http://127.0.0.1:1").expect("static URL is valid");
    CookieSyncClient::new(endpoints).expect("client builds")
}
