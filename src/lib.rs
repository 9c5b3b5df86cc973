//! Cookie Sync Library
//!
//! Relays authentication tokens to a backend that mirrors them into HttpOnly
//! cookies, and asks the backend to clear those cookies on logout. Both calls
//! are best-effort: a failure is logged and never reaches the caller, since the
//! caller's primary token store keeps working without the cookies.
//!
//! # Architecture
//!
//! - [`config`] - Backend endpoint configuration (base URL resolution)
//! - [`sync`] - The sync client, its error taxonomy and the best-effort runner

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod sync;
mod user_agent;

// Re-export commonly used types
pub use config::{BASE_URL_ENV, ConfigError, DEFAULT_BASE_URL, EndpointConfig};
pub use sync::{
    BestEffortOutcome, ClientError, CookieSyncClient, Operation, SyncError, TokenPair,
    UNKNOWN_ERROR_DETAIL, run_best_effort,
};
