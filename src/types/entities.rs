// src/types/entities.rs
//! Backend-owned record shapes, consumed for rendering and never persisted
//! here. Everything beyond the id is optional: list endpoints omit, null
//! and rename fields freely across deployments, and one sparse record must
//! not take a whole screen down.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ===== Moderation status =====

/// Tri-state verification shared by enterprises, jobs, videos and
/// enterprise signup requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerificationStatus {
    #[default]
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "accepted")]
    Accepted,
    #[serde(alias = "declined")]
    Declined,
}

impl VerificationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "En attente",
            Self::Accepted => "Accepté",
            Self::Declined => "Refusé",
        }
    }
}

// ===== Embedded relation stubs =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

// ===== Entities =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub sector_id: Option<i64>,
    #[serde(default)]
    pub sector: Option<NamedRef>,
    #[serde(default, deserialize_with = "flexible_time::deserialize")]
    pub email_verified_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "flexible_time::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Candidate {
    /// A candidate counts as active once their email is verified.
    pub fn is_active(&self) -> bool {
        self.email_verified_at.is_some()
    }

    pub fn full_name(&self) -> String {
        join_names(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enterprise {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// Legal identifiers (ICE and trade register number).
    #[serde(default)]
    pub ice: Option<String>,
    #[serde(default)]
    pub rc: Option<String>,
    #[serde(default)]
    pub sector_id: Option<i64>,
    #[serde(default)]
    pub sector: Option<NamedRef>,
    #[serde(default)]
    pub plan_id: Option<i64>,
    #[serde(default)]
    pub plan: Option<NamedRef>,
    #[serde(default)]
    pub status: VerificationStatus,
    #[serde(default, deserialize_with = "flexible_time::deserialize")]
    pub email_verified_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "flexible_time::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enterprise_id: Option<i64>,
    #[serde(default)]
    pub enterprise: Option<NamedRef>,
    #[serde(default)]
    pub sector_id: Option<i64>,
    #[serde(default)]
    pub sector: Option<NamedRef>,
    #[serde(default)]
    pub status: VerificationStatus,
    #[serde(default, alias = "start_date", deserialize_with = "flexible_time::deserialize")]
    pub starts_on: Option<DateTime<Utc>>,
    #[serde(default, alias = "end_date", deserialize_with = "flexible_time::deserialize")]
    pub ends_on: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "flexible_time::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoCv {
    pub id: i64,
    #[serde(default, alias = "link", alias = "url")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub candidate_id: Option<i64>,
    #[serde(default)]
    pub candidate: Option<CandidateRef>,
    #[serde(default)]
    pub status: VerificationStatus,
    #[serde(default, deserialize_with = "flexible_time::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

impl VideoCv {
    pub fn candidate_name(&self) -> String {
        match &self.candidate {
            Some(c) => join_names(c.first_name.as_deref(), c.last_name.as_deref()),
            None => "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "flexible_amount::deserialize")]
    pub price: Option<f64>,
    #[serde(default, alias = "duration")]
    pub duration_days: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "flexible_time::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    #[serde(default, deserialize_with = "flexible_amount::deserialize")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub plan_id: Option<i64>,
    #[serde(default)]
    pub plan: Option<NamedRef>,
    #[serde(default)]
    pub enterprise_id: Option<i64>,
    #[serde(default)]
    pub enterprise: Option<NamedRef>,
    #[serde(default, deserialize_with = "flexible_time::deserialize")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "flexible_time::deserialize")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "flexible_time::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Sale {
    pub fn is_paid(&self) -> bool {
        self.status
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("paid"))
            .unwrap_or(false)
    }
}

/// Enterprise signup request awaiting review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub id: i64,
    #[serde(default, alias = "company_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub plan_id: Option<i64>,
    #[serde(default)]
    pub plan: Option<NamedRef>,
    #[serde(default)]
    pub status: VerificationStatus,
    #[serde(default, deserialize_with = "flexible_time::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

fn join_names(first: Option<&str>, last: Option<&str>) -> String {
    match (first, last) {
        (Some(f), Some(l)) => format!("{} {}", f, l),
        (Some(f), None) => f.to_string(),
        (None, Some(l)) => l.to_string(),
        (None, None) => "-".to_string(),
    }
}

// ===== Lenient field deserializers =====

/// Timestamps arrive as RFC 3339, as `YYYY-MM-DD HH:MM:SS`, or as a bare
/// date depending on the endpoint. Unparseable values read as absent.
pub(crate) mod flexible_time {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<Value> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|v| v.as_str().and_then(parse)))
    }

    pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Some(naive.and_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}

/// Amounts arrive as JSON numbers or as decimal strings.
pub(crate) mod flexible_amount {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<Value> = Option::deserialize(deserializer)?;
        Ok(raw.and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_candidate_from_sparse_payload() {
        let candidate: Candidate = serde_json::from_value(json!({
            "id": 1,
            "email": "a@b.com",
            "email_verified_at": null
        }))
        .unwrap();
        assert_eq!(candidate.id, 1);
        assert!(!candidate.is_active());
        assert_eq!(candidate.full_name(), "-");
    }

    #[test]
    fn test_backend_timestamp_formats() {
        assert!(flexible_time::parse("2024-01-15 10:30:00").is_some());
        assert!(flexible_time::parse("2024-01-15T10:30:00Z").is_some());
        assert!(flexible_time::parse("2024-01-15T10:30:00+01:00").is_some());
        assert!(flexible_time::parse("2024-01-15").is_some());
        assert!(flexible_time::parse("janvier 2024").is_none());
    }

    #[test]
    fn test_verified_candidate_is_active() {
        let candidate: Candidate = serde_json::from_value(json!({
            "id": 2,
            "first_name": "Yasmine",
            "last_name": "El Idrissi",
            "email_verified_at": "2024-03-02 09:15:00"
        }))
        .unwrap();
        assert!(candidate.is_active());
        assert_eq!(candidate.full_name(), "Yasmine El Idrissi");
    }

    #[test]
    fn test_status_accepts_lowercase_alias() {
        let enterprise: Enterprise = serde_json::from_value(json!({
            "id": 3,
            "name": "Atlas Conseil",
            "status": "accepted"
        }))
        .unwrap();
        assert_eq!(enterprise.status, VerificationStatus::Accepted);
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let job: Job = serde_json::from_value(json!({"id": 4, "title": "Dev"})).unwrap();
        assert_eq!(job.status, VerificationStatus::Pending);
    }

    #[test]
    fn test_status_serializes_capitalized() {
        assert_eq!(
            serde_json::to_value(VerificationStatus::Accepted).unwrap(),
            json!("Accepted")
        );
    }

    #[test]
    fn test_amount_from_string_or_number() {
        let sale: Sale =
            serde_json::from_value(json!({"id": 5, "amount": "1200.50", "status": "paid"}))
                .unwrap();
        assert_eq!(sale.amount, Some(1200.50));
        assert!(sale.is_paid());

        let sale: Sale =
            serde_json::from_value(json!({"id": 6, "amount": 300, "status": "pending"})).unwrap();
        assert_eq!(sale.amount, Some(300.0));
        assert!(!sale.is_paid());
    }

    #[test]
    fn test_video_url_aliases() {
        let video: VideoCv =
            serde_json::from_value(json!({"id": 7, "link": "https://cdn/v.mp4"})).unwrap();
        assert_eq!(video.video_url.as_deref(), Some("https://cdn/v.mp4"));
    }
}
