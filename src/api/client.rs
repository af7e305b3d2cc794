// src/api/client.rs
//! Request wrapper for the FaceJob backend. Every authenticated call goes
//! through here: token lookup, refresh throttling, bounded retries on 429
//! and on the backend's "suspicious activity" lockout, and user-facing
//! notifications for everything terminal.

use anyhow::{Context, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Method, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::warn;
use uuid::Uuid;

use super::error::{ApiError, ApiResult};
use super::gate::RefreshGate;
use crate::config::ConsoleConfig;
use crate::notify;
use crate::sanitize::sanitize_value;
use crate::session::SessionStore;

/// Retry and throttle knobs, kept together so tests can tighten them.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Minimum spacing between manual refreshes of one endpoint.
    pub min_refresh_interval: Duration,
    /// Backoff for a 429 without a usable `Retry-After` header.
    pub default_retry_after: Duration,
    /// Fixed wait after the 400 "suspicious activity" sentinel.
    pub suspicious_lockout: Duration,
    /// Retries allowed per logical call, on top of the initial attempt.
    pub max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            min_refresh_interval: Duration::from_secs(5),
            default_retry_after: Duration::from_secs(5),
            suspicious_lockout: Duration::from_secs(30),
            max_retries: 3,
        }
    }
}

pub struct ApiClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session: SessionStore,
    pub(crate) gate: RefreshGate,
    policy: RetryPolicy,
}

impl ApiClient {
    pub fn new(config: &ConsoleConfig) -> Result<Self> {
        Self::with_policy(config, config.policy.clone())
    }

    pub fn with_policy(config: &ConsoleConfig, policy: RetryPolicy) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
            session: SessionStore::new(config.session_path()),
            gate: RefreshGate::load(config.refresh_state_path()),
            policy,
        })
    }

    /// Plain authenticated GET, no throttle.
    pub async fn get(&self, endpoint: &str) -> ApiResult<Value> {
        self.execute(Method::GET, endpoint, None, false).await
    }

    /// Operator-initiated refresh of `endpoint`. Throttled per endpoint and
    /// acknowledged with a success banner when fresh data arrives.
    pub async fn refresh(&self, endpoint: &str) -> ApiResult<Value> {
        self.execute(Method::GET, endpoint, None, true).await
    }

    /// Mutating call. The body is sanitized once before the first attempt.
    pub async fn mutate(&self, method: Method, endpoint: &str, body: Value) -> ApiResult<Value> {
        self.execute(method, endpoint, Some(body), false).await
    }

    pub async fn delete(&self, endpoint: &str) -> ApiResult<Value> {
        self.execute(Method::DELETE, endpoint, None, false).await
    }

    async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        manual_refresh: bool,
    ) -> ApiResult<Value> {
        let result = self.run(method, endpoint, body, manual_refresh).await;
        match &result {
            Ok(_) if manual_refresh => notify::success("Données actualisées."),
            Ok(_) => {}
            Err(e @ ApiError::Throttled { .. }) => notify::warning(&e.to_string()),
            Err(e) => notify::error(&e.to_string()),
        }
        result
    }

    async fn run(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
        manual_refresh: bool,
    ) -> ApiResult<Value> {
        let token = self.session.token().ok_or(ApiError::MissingAuth)?;

        if manual_refresh {
            self.gate
                .check_and_arm(endpoint, self.policy.min_refresh_interval)
                .map_err(|retry_in| ApiError::Throttled { retry_in })?;
        }

        let body = body.map(sanitize_value);
        let url = format!("{}{}", self.base_url, endpoint);
        // One id per logical call, shared by its retries.
        let request_id = Uuid::new_v4().to_string();

        let mut attempts: u32 = 0;
        loop {
            attempts += 1;

            let mut request = self
                .http
                .request(method.clone(), &url)
                .header(AUTHORIZATION, format!("Bearer {}", token))
                .header(CONTENT_TYPE, "application/json")
                .header("X-Request-Id", &request_id);
            if let Some(ref json) = body {
                request = request.json(json);
            }

            let response = request.send().await?;
            let status = response.status();

            if status.is_success() {
                let text = response.text().await?;
                if text.trim().is_empty() {
                    return Ok(Value::Null);
                }
                return Ok(serde_json::from_str(&text)?);
            }

            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempts > self.policy.max_retries {
                    return Err(ApiError::RateLimited { attempts });
                }
                let wait = retry_after(&response).unwrap_or(self.policy.default_retry_after);
                warn!(
                    endpoint,
                    attempt = attempts,
                    wait_ms = wait.as_millis() as u64,
                    "rate limited, waiting before retry"
                );
                tokio::time::sleep(wait).await;
                continue;
            }

            let status_text = status
                .canonical_reason()
                .unwrap_or("Erreur inconnue")
                .to_string();
            let body_text = response.text().await.unwrap_or_default();

            if status == StatusCode::BAD_REQUEST && is_suspicious(&body_text) {
                if attempts > self.policy.max_retries {
                    return Err(ApiError::Rejected {
                        status: status.as_u16(),
                        message: error_message(&body_text).unwrap_or(status_text),
                    });
                }
                warn!(
                    endpoint,
                    attempt = attempts,
                    lockout_ms = self.policy.suspicious_lockout.as_millis() as u64,
                    "suspicious activity lockout, waiting before retry"
                );
                tokio::time::sleep(self.policy.suspicious_lockout).await;
                continue;
            }

            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: error_message(&body_text).unwrap_or(status_text),
            });
        }
    }
}

/// `Retry-After` in seconds. The HTTP-date form is rare enough here that
/// it falls back to the policy default.
fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// The backend's throttling sentinel: a 400 whose body carries
/// `error_code: "CLIENT_ERROR"` and a message mentioning suspicious activity.
fn is_suspicious(body: &str) -> bool {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return false;
    };
    let code_matches = value.get("error_code").and_then(Value::as_str) == Some("CLIENT_ERROR");
    let message_matches = value
        .get("message")
        .and_then(Value::as_str)
        .map(|m| m.to_lowercase().contains("suspicious activity"))
        .unwrap_or(false);
    code_matches && message_matches
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suspicious_sentinel_detection() {
        assert!(is_suspicious(
            r#"{"error_code":"CLIENT_ERROR","message":"Suspicious activity detected"}"#
        ));
        assert!(is_suspicious(
            r#"{"error_code":"CLIENT_ERROR","message":"blocked: SUSPICIOUS ACTIVITY"}"#
        ));
        assert!(!is_suspicious(
            r#"{"error_code":"CLIENT_ERROR","message":"Validation failed"}"#
        ));
        assert!(!is_suspicious(
            r#"{"error_code":"OTHER","message":"Suspicious activity"}"#
        ));
        assert!(!is_suspicious("not json"));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"message":"Compte introuvable"}"#),
            Some("Compte introuvable".to_string())
        );
        assert_eq!(error_message(r#"{"error":"x"}"#), None);
        assert_eq!(error_message("<html>"), None);
    }
}
