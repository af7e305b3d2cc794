//! Administration console for the FaceJob job-board platform. The library
//! wraps the backend REST API behind a throttled, retrying client; the
//! binary exposes one subcommand per admin screen.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod notify;
pub mod render;
pub mod sanitize;
pub mod session;
pub mod types;

pub use api::{ApiClient, ApiError, ApiResult, RetryPolicy};
pub use config::ConsoleConfig;
