// src/config.rs
//! Layered console configuration: environment variables win over
//! `config.toml` under the console home, which wins over defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::RetryPolicy;

pub const CONFIG_FILE: &str = "config.toml";
pub const SESSION_FILE: &str = "session.toml";
pub const REFRESH_STATE_FILE: &str = "refresh.toml";
pub const DEFAULT_HOME_DIR: &str = ".facejob-admin";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Backend base URL, without a trailing slash.
    pub api_url: String,
    /// Directory holding config, session and throttle state.
    pub home: PathBuf,
    pub request_timeout_seconds: u64,
    pub policy: RetryPolicy,
}

/// On-disk shape of `config.toml`. Everything is optional; the file itself
/// is optional too.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_url: Option<String>,
    request_timeout_seconds: Option<u64>,
    min_refresh_interval_seconds: Option<u64>,
    default_retry_after_seconds: Option<u64>,
    suspicious_lockout_seconds: Option<u64>,
    max_retries: Option<u32>,
}

impl ConsoleConfig {
    pub fn load(home_override: Option<PathBuf>) -> Result<Self> {
        let home = home_override.unwrap_or_else(resolve_home);
        let file = read_config_file(&home)?;
        Self::from_parts(std::env::var("FACEJOB_API_URL").ok(), file, home)
    }

    fn from_parts(env_url: Option<String>, file: ConfigFile, home: PathBuf) -> Result<Self> {
        let api_url = env_url.or(file.api_url).context(
            "Backend URL not configured. Set FACEJOB_API_URL or api_url in config.toml",
        )?;
        let api_url = api_url.trim_end_matches('/').to_string();

        let mut policy = RetryPolicy::default();
        if let Some(secs) = file.min_refresh_interval_seconds {
            policy.min_refresh_interval = Duration::from_secs(secs);
        }
        if let Some(secs) = file.default_retry_after_seconds {
            policy.default_retry_after = Duration::from_secs(secs);
        }
        if let Some(secs) = file.suspicious_lockout_seconds {
            policy.suspicious_lockout = Duration::from_secs(secs);
        }
        if let Some(count) = file.max_retries {
            policy.max_retries = count;
        }

        Ok(Self {
            api_url,
            home,
            request_timeout_seconds: file
                .request_timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            policy,
        })
    }

    pub fn session_path(&self) -> PathBuf {
        self.home.join(SESSION_FILE)
    }

    pub fn refresh_state_path(&self) -> PathBuf {
        self.home.join(REFRESH_STATE_FILE)
    }

    pub fn ensure_home(&self) -> Result<()> {
        std::fs::create_dir_all(&self.home)
            .with_context(|| format!("Failed to create {}", self.home.display()))
    }
}

/// `FACEJOB_ADMIN_HOME`, else `~/.facejob-admin`, else a local
/// `.facejob-admin` when no home directory is known.
fn resolve_home() -> PathBuf {
    if let Ok(dir) = std::env::var("FACEJOB_ADMIN_HOME") {
        return PathBuf::from(dir);
    }
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(DEFAULT_HOME_DIR),
        Err(_) => PathBuf::from(DEFAULT_HOME_DIR),
    }
}

fn read_config_file(home: &Path) -> Result<ConfigFile> {
    let path = home.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(ConfigFile::default());
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_env_url_wins_over_file() {
        let file = ConfigFile {
            api_url: Some("https://file.example".into()),
            ..ConfigFile::default()
        };
        let config = ConsoleConfig::from_parts(
            Some("https://env.example/".into()),
            file,
            PathBuf::from("/tmp/x"),
        )
        .unwrap();
        assert_eq!(config.api_url, "https://env.example");
    }

    #[test]
    fn test_missing_url_is_an_error() {
        let result =
            ConsoleConfig::from_parts(None, ConfigFile::default(), PathBuf::from("/tmp/x"));
        assert!(result.is_err());
    }

    #[test]
    fn test_file_knobs_override_policy_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
api_url = "https://api.facejob.ma"
request_timeout_seconds = 10
min_refresh_interval_seconds = 2
suspicious_lockout_seconds = 60
max_retries = 5
"#,
        )
        .unwrap();

        let file = read_config_file(dir.path()).unwrap();
        let config =
            ConsoleConfig::from_parts(None, file, dir.path().to_path_buf()).unwrap();

        assert_eq!(config.api_url, "https://api.facejob.ma");
        assert_eq!(config.request_timeout_seconds, 10);
        assert_eq!(config.policy.min_refresh_interval, Duration::from_secs(2));
        assert_eq!(config.policy.default_retry_after, Duration::from_secs(5));
        assert_eq!(config.policy.suspicious_lockout, Duration::from_secs(60));
        assert_eq!(config.policy.max_retries, 5);
    }

    #[test]
    fn test_absent_file_means_defaults() {
        let dir = tempdir().unwrap();
        let file = read_config_file(dir.path()).unwrap();
        assert!(file.api_url.is_none());
        assert!(file.max_retries.is_none());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "api_url = [broken").unwrap();
        assert!(read_config_file(dir.path()).is_err());
    }

    #[test]
    fn test_state_paths_live_under_home() {
        let config = ConsoleConfig::from_parts(
            Some("https://api.facejob.ma".into()),
            ConfigFile::default(),
            PathBuf::from("/srv/console"),
        )
        .unwrap();
        assert_eq!(
            config.session_path(),
            PathBuf::from("/srv/console/session.toml")
        );
        assert_eq!(
            config.refresh_state_path(),
            PathBuf::from("/srv/console/refresh.toml")
        );
    }
}
