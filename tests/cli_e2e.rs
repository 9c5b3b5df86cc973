//! End-to-end CLI tests for the cookie-sync binary.

// `Command::cargo_bin` is deprecated in assert_cmd >=2.0.17 in favor of
// `cargo::cargo_bin_cmd!` macro. Suppressed until migration to the new API.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cookie_sync_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cookie-sync").unwrap();
    cmd.env_remove("COOKIE_SYNC_API_URL").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_binary_help_displays_usage() {
    cookie_sync_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("HttpOnly cookies"));
}

#[test]
fn test_binary_config_defaults_to_localhost() {
    cookie_sync_cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "set_cookies_url = http://localhost:8000/auth/set-cookies",
        ))
        .stdout(predicate::str::contains(
            "logout_url = http://localhost:8000/auth/logout",
        ));
}

#[test]
fn test_binary_config_reads_env_base_url() {
    cookie_sync_cmd()
        .env("COOKIE_SYNC_API_URL", "https://api.example.com/")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("base_url = https://api.example.com\n"));
}

#[test]
fn test_binary_base_url_flag_overrides_env() {
    cookie_sync_cmd()
        .env("COOKIE_SYNC_API_URL", "https://ignored.example.com")
        .args(["config", "--base-url", "http://flag.example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_url = http://flag.example.com"));
}

#[test]
fn test_binary_invalid_base_url_fails() {
    cookie_sync_cmd()
        .env("COOKIE_SYNC_API_URL", "not a url")
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("COOKIE_SYNC_API_URL"));
}

#[test]
fn test_binary_sync_unreachable_backend_exits_zero() {
    let assert = cookie_sync_cmd()
        .args([
            "--base-url",
            "http://127.0.0.1:1",
            "sync",
            "--access-token",
            "a1",
            "--refresh-token",
            "r1",
        ])
        .assert()
        .success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("WARN"), "expected warning on stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_binary_sync_backend_error_exits_zero_and_logs_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/set-cookies"))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"detail":"db error"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let output = tokio::task::spawn_blocking(move || {
        cookie_sync_cmd()
            .args(["--base-url", &base_url, "sync", "--access-token", "a1", "--refresh-token", "r1"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success(), "sync must exit 0: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("db error"), "detail missing from logs: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_binary_logout_posts_to_backend() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let output = tokio::task::spawn_blocking(move || {
        cookie_sync_cmd()
            .args(["-q", "--base-url", &base_url, "logout"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success(), "logout must exit 0: {output:?}");
}
