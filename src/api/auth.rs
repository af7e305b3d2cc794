// src/api/auth.rs
//! Login and logout against the admin auth endpoints. Login runs outside
//! the main wrapper since no token exists yet; logout is fire-and-forget
//! and always wipes local state.

use reqwest::header::AUTHORIZATION;
use serde_json::{json, Value};
use tracing::{info, warn};

use super::client::ApiClient;
use super::error::{ApiError, ApiResult};
use crate::sanitize::sanitize_text;
use crate::session::Session;

pub const LOGIN_ENDPOINT: &str = "/api/v1/auth/admin/login";
pub const LOGOUT_ENDPOINT: &str = "/api/v1/logout";

impl ApiClient {
    /// Authenticate as super-admin and persist the session on success.
    /// The password travels verbatim; scrubbing it would lock out any
    /// admin whose password contains a flagged substring.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        let body = json!({
            "email": sanitize_text(email),
            "password": password,
        });

        let url = format!("{}{}", self.base_url, LOGIN_ENDPOINT);
        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .unwrap_or("Erreur inconnue")
                .to_string();
            let body_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&body_text)
                .ok()
                .and_then(|v| v.get("message")?.as_str().map(str::to_owned))
                .unwrap_or(status_text);
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        let payload: Value = serde_json::from_str(&text)?;
        let token = extract_token(&payload).ok_or(ApiError::MalformedLogin)?;

        let session = Session::new(token, email.to_string());
        self.session
            .save(&session)
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        info!(email, "admin session opened");
        Ok(session)
    }

    /// Tell the backend goodbye, then wipe the local session and throttle
    /// state no matter what the backend answered.
    pub async fn logout(&self) -> ApiResult<()> {
        if let Some(token) = self.session.token() {
            let url = format!("{}{}", self.base_url, LOGOUT_ENDPOINT);
            let sent = self
                .http
                .get(&url)
                .header(AUTHORIZATION, format!("Bearer {}", token))
                .send()
                .await;
            if let Err(e) = sent {
                warn!(error = %e, "logout call failed, clearing local session anyway");
            }
        }

        self.session
            .clear()
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        self.gate.reset();
        info!("admin session closed");
        Ok(())
    }

    /// Currently signed-in admin, if a valid session exists.
    pub fn current_session(&self) -> Option<Session> {
        self.session.load().ok().flatten()
    }
}

/// Token field at the top level or under `data`, whichever the backend
/// chose for this deployment.
fn extract_token(payload: &Value) -> Option<String> {
    payload
        .get("token")
        .or_else(|| payload.get("data")?.get("token"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_extraction_both_shapes() {
        assert_eq!(
            extract_token(&json!({"token": "abc"})),
            Some("abc".to_string())
        );
        assert_eq!(
            extract_token(&json!({"data": {"token": "xyz"}})),
            Some("xyz".to_string())
        );
        assert_eq!(extract_token(&json!({"status": "ok"})), None);
        assert_eq!(extract_token(&json!({"token": 42})), None);
    }
}
