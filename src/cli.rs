//! CLI argument definitions using clap derive macros.

use clap::{Parser, Subcommand};

/// Mirror auth tokens into backend-managed HttpOnly cookies.
///
/// Sync and logout calls are best-effort: backend failures are logged as
/// warnings and the command still exits successfully.
#[derive(Parser, Debug)]
#[command(name = "cookie-sync")]
#[command(author, version, about)]
pub struct Cli {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Backend base URL (overrides COOKIE_SYNC_API_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send an access/refresh token pair to the set-cookies endpoint
    Sync {
        /// Access token to mirror
        #[arg(long)]
        access_token: String,

        /// Refresh token to mirror
        #[arg(long)]
        refresh_token: String,
    },

    /// Ask the backend to clear its auth cookies
    Logout,

    /// Show the resolved backend endpoints
    Config,
}
