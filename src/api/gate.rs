// src/api/gate.rs
//! Per-endpoint throttle for manual refreshes. One shared gate replaces
//! the ad hoc per-screen timestamps the policy used to be scattered across.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Default, Serialize, Deserialize)]
struct GateState {
    #[serde(default)]
    last_refresh: HashMap<String, DateTime<Utc>>,
}

/// Remembers the last accepted manual refresh per endpoint. A refresh
/// inside the window is rejected with the remaining wait, rounded up to
/// whole seconds; state survives restarts through a small TOML file.
#[derive(Debug)]
pub struct RefreshGate {
    path: PathBuf,
    state: Mutex<GateState>,
}

impl RefreshGate {
    /// Load persisted state, falling back to an empty gate when the file
    /// is absent or unreadable. The throttle still works in-process.
    pub fn load(path: PathBuf) -> Self {
        let state = match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(state) => state,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "refresh state unreadable, starting empty");
                    GateState::default()
                }
            },
            Err(_) => GateState::default(),
        };
        Self {
            path,
            state: Mutex::new(state),
        }
    }

    /// Accept or reject a manual refresh of `endpoint`. On rejection the
    /// remaining wait in whole seconds comes back; on acceptance the clock
    /// rearms from now.
    pub fn check_and_arm(&self, endpoint: &str, window: Duration) -> Result<(), u64> {
        self.check_and_arm_at(endpoint, window, Utc::now())
    }

    fn check_and_arm_at(
        &self,
        endpoint: &str,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Result<(), u64> {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let window_ms = window.as_millis() as i64;
        if let Some(last) = state.last_refresh.get(endpoint) {
            let elapsed_ms = (now - *last).num_milliseconds();
            if elapsed_ms < window_ms {
                // Clamp guards against persisted timestamps from the future.
                let remaining_ms = (window_ms - elapsed_ms).min(window_ms);
                return Err(((remaining_ms + 999) / 1000) as u64);
            }
        }

        state.last_refresh.insert(endpoint.to_string(), now);
        self.persist(&state);
        Ok(())
    }

    /// Forget all refresh timestamps, e.g. on logout.
    pub fn reset(&self) {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        state.last_refresh.clear();
        self.persist(&state);
    }

    fn persist(&self, state: &GateState) {
        let content = match toml::to_string(state) {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "failed to serialize refresh state");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "failed to create state directory");
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, content) {
            warn!(path = %self.path.display(), error = %e, "failed to persist refresh state");
        }
    }
}
