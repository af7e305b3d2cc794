// src/commands/mod.rs
//! One module per admin screen. Each follows the same cycle: fetch through
//! the wrapper, normalize the envelope, render, and after a mutation
//! refetch the list to show the new state.

pub mod auth;
pub mod candidates;
pub mod dashboard;
pub mod enterprises;
pub mod jobs;
pub mod plans;
pub mod requests;
pub mod sales;
pub mod videos;

use serde::de::DeserializeOwned;

use crate::api::{ApiClient, ApiError};
use crate::notify;
use crate::types::normalize_list;

/// Screen-level list fetch. `None` means nothing should be rendered (the
/// call was throttled, or the operator is logged out); `Some(vec![])`
/// keeps the screen usable after a terminal error.
pub(crate) async fn fetch_list<T: DeserializeOwned>(
    client: &ApiClient,
    endpoint: &str,
    refresh: bool,
) -> Option<Vec<T>> {
    let result = if refresh {
        client.refresh(endpoint).await
    } else {
        client.get(endpoint).await
    };

    match result {
        Ok(payload) => match normalize_list(payload) {
            Ok(list) => Some(list),
            Err(e) => {
                notify::error(&ApiError::from(e).to_string());
                Some(Vec::new())
            }
        },
        Err(ApiError::Throttled { .. }) | Err(ApiError::MissingAuth) => None,
        Err(_) => Some(Vec::new()),
    }
}
