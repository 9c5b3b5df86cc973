//! CLI entry point for the cookie-sync tool.

use anyhow::{Context, Result};
use clap::Parser;
use cookie_sync::{BASE_URL_ENV, CookieSyncClient, EndpointConfig};
use tracing::debug;

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    // Command carries raw tokens; only log the flags.
    debug!(verbose = cli.verbose, quiet = cli.quiet, base_url = ?cli.base_url, "CLI arguments parsed");

    let endpoints = match cli.base_url.as_deref() {
        Some(base_url) => EndpointConfig::new(base_url).context("invalid --base-url")?,
        None => EndpointConfig::from_env()
            .with_context(|| format!("invalid {BASE_URL_ENV} environment value"))?,
    };

    match cli.command {
        Command::Config => {
            println!("base_url = {}", endpoints.base_url());
            println!("set_cookies_url = {}", endpoints.set_cookies_url());
            println!("logout_url = {}", endpoints.logout_url());
        }
        Command::Sync {
            access_token,
            refresh_token,
        } => {
            let client = CookieSyncClient::new(endpoints)?;
            client.sync_tokens(&access_token, &refresh_token).await;
        }
        Command::Logout => {
            let client = CookieSyncClient::new(endpoints)?;
            client.clear_cookies().await;
        }
    }

    Ok(())
}
