//! Token-to-cookie synchronization.
//!
//! # Features
//!
//! - Relays access/refresh tokens to `POST /auth/set-cookies`
//! - Requests cookie invalidation via `POST /auth/logout`
//! - Credential inclusion through a shared cookie jar
//! - Best-effort policy: failures are logged as warnings, never returned

mod best_effort;
mod client;
mod error;
mod token;

pub use best_effort::{BestEffortOutcome, COMPONENT, Operation, run_best_effort};
pub use client::CookieSyncClient;
pub use error::{ClientError, SyncError, UNKNOWN_ERROR_DETAIL};
pub use token::TokenPair;
