// src/api/mod.rs
//! HTTP client for the FaceJob admin backend.

pub mod auth;
pub mod client;
pub mod error;
pub mod gate;

pub use client::{ApiClient, RetryPolicy};
pub use error::{ApiError, ApiResult};
