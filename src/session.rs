// src/session.rs
//! Admin session persistence - a single storage strategy for the bearer token

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

/// Sessions outlive the process for as long as the backend token does.
pub const SESSION_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, email: String) -> Self {
        Self {
            token,
            email,
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expired_at(Utc::now())
    }

    fn expired_at(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at > Duration::days(SESSION_TTL_DAYS)
    }
}

/// File-backed session store. An expired or unreadable session reads as
/// absent, so callers only ever see a usable token or none at all.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string(session).context("Failed to serialize session")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let session: Session = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        if session.is_expired() {
            return Ok(None);
        }
        Ok(Some(session))
    }

    /// Current bearer token, read fresh on every call. Storage problems are
    /// logged and reported as an absent token rather than an error.
    pub fn token(&self) -> Option<String> {
        match self.load() {
            Ok(session) => session.map(|s| s.token),
            Err(e) => {
                warn!(error = %e, "session unreadable, treating as logged out");
                None
            }
        }
    }

    /// Remove the session file. Missing files are not an error.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}
