// src/commands/dashboard.rs
//! Aggregate view of the platform. Every number is derived locally from
//! the raw lists; no aggregation is asked of the backend.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};

use crate::api::ApiClient;
use crate::render;
use crate::types::{Candidate, Enterprise, Job, Sale, VerificationStatus};

use super::{candidates, enterprises, jobs, sales};

#[derive(Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total_candidates: usize,
    pub active_candidates: usize,
    pub inactive_candidates: usize,
    pub new_candidates_week: usize,
    pub total_enterprises: usize,
    pub pending_enterprises: usize,
    pub accepted_enterprises: usize,
    pub declined_enterprises: usize,
    pub total_jobs: usize,
    pub pending_jobs: usize,
    pub new_jobs_week: usize,
    pub total_sales: usize,
    pub paid_revenue: f64,
}

pub async fn run(client: &ApiClient) -> Result<()> {
    // The candidates fetch carries the refresh tag; repeating the whole
    // dashboard inside the window is what the throttle is for.
    let Some(candidate_list) =
        super::fetch_list::<Candidate>(client, candidates::CANDIDATES_ENDPOINT, true).await
    else {
        return Ok(());
    };
    let enterprise_list =
        super::fetch_list::<Enterprise>(client, enterprises::ENTERPRISES_ENDPOINT, false)
            .await
            .unwrap_or_default();
    let job_list = super::fetch_list::<Job>(client, jobs::JOBS_ENDPOINT, false)
        .await
        .unwrap_or_default();
    let sale_list = super::fetch_list::<Sale>(client, sales::SALES_ENDPOINT, false)
        .await
        .unwrap_or_default();

    let stats = derive_stats(
        &candidate_list,
        &enterprise_list,
        &job_list,
        &sale_list,
        Utc::now(),
    );
    render_stats(&stats);
    Ok(())
}

pub fn derive_stats(
    candidates: &[Candidate],
    enterprises: &[Enterprise],
    jobs: &[Job],
    sales: &[Sale],
    now: DateTime<Utc>,
) -> DashboardStats {
    let week_ago = now - Duration::days(7);
    let since = |created: &Option<DateTime<Utc>>| created.map(|d| d > week_ago).unwrap_or(false);

    DashboardStats {
        total_candidates: candidates.len(),
        active_candidates: candidates.iter().filter(|c| c.is_active()).count(),
        inactive_candidates: candidates.iter().filter(|c| !c.is_active()).count(),
        new_candidates_week: candidates.iter().filter(|c| since(&c.created_at)).count(),
        total_enterprises: enterprises.len(),
        pending_enterprises: count_status(
            enterprises.iter().map(|e| e.status),
            VerificationStatus::Pending,
        ),
        accepted_enterprises: count_status(
            enterprises.iter().map(|e| e.status),
            VerificationStatus::Accepted,
        ),
        declined_enterprises: count_status(
            enterprises.iter().map(|e| e.status),
            VerificationStatus::Declined,
        ),
        total_jobs: jobs.len(),
        pending_jobs: count_status(jobs.iter().map(|j| j.status), VerificationStatus::Pending),
        new_jobs_week: jobs.iter().filter(|j| since(&j.created_at)).count(),
        total_sales: sales.len(),
        paid_revenue: sales
            .iter()
            .filter(|s| s.is_paid())
            .filter_map(|s| s.amount)
            .sum(),
    }
}

fn count_status(
    statuses: impl Iterator<Item = VerificationStatus>,
    wanted: VerificationStatus,
) -> usize {
    statuses.filter(|s| *s == wanted).count()
}

fn render_stats(stats: &DashboardStats) {
    println!("📊 Tableau de bord FaceJob");
    render::field(
        "Candidats",
        &format!(
            "{} ({} actifs, {} inactifs, +{} cette semaine)",
            stats.total_candidates,
            stats.active_candidates,
            stats.inactive_candidates,
            stats.new_candidates_week
        ),
    );
    render::field(
        "Entreprises",
        &format!(
            "{} ({} en attente, {} acceptées, {} refusées)",
            stats.total_enterprises,
            stats.pending_enterprises,
            stats.accepted_enterprises,
            stats.declined_enterprises
        ),
    );
    render::field(
        "Offres",
        &format!(
            "{} ({} en attente, +{} cette semaine)",
            stats.total_jobs, stats.pending_jobs, stats.new_jobs_week
        ),
    );
    render::field(
        "Ventes",
        &format!(
            "{} paiement(s), revenu encaissé {:.2} MAD",
            stats.total_sales, stats.paid_revenue
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_unverified_candidate_counts_as_inactive() {
        let candidates: Vec<Candidate> = serde_json::from_value(json!([
            {"id": 1, "email": "a@b.com", "email_verified_at": null}
        ]))
        .unwrap();

        let stats = derive_stats(&candidates, &[], &[], &[], Utc::now());
        assert_eq!(stats.active_candidates, 0);
        assert_eq!(stats.inactive_candidates, 1);
        assert_eq!(stats.total_candidates, 1);
    }

    #[test]
    fn test_week_window_and_status_breakdown() {
        let now = at("2024-03-10T12:00:00Z");
        let candidates: Vec<Candidate> = serde_json::from_value(json!([
            {"id": 1, "created_at": "2024-03-08 09:00:00", "email_verified_at": "2024-03-08 10:00:00"},
            {"id": 2, "created_at": "2024-02-01 09:00:00"}
        ]))
        .unwrap();
        let enterprises: Vec<Enterprise> = serde_json::from_value(json!([
            {"id": 1, "status": "Accepted"},
            {"id": 2, "status": "Pending"},
            {"id": 3, "status": "Declined"},
            {"id": 4}
        ]))
        .unwrap();

        let stats = derive_stats(&candidates, &enterprises, &[], &[], now);
        assert_eq!(stats.new_candidates_week, 1);
        assert_eq!(stats.active_candidates, 1);
        assert_eq!(stats.pending_enterprises, 2);
        assert_eq!(stats.accepted_enterprises, 1);
        assert_eq!(stats.declined_enterprises, 1);
    }

    #[test]
    fn test_revenue_sums_only_paid_sales() {
        let sales: Vec<Sale> = serde_json::from_value(json!([
            {"id": 1, "amount": "1000.50", "status": "paid"},
            {"id": 2, "amount": 200, "status": "pending"},
            {"id": 3, "amount": 300, "status": "PAID"},
            {"id": 4, "status": "paid"}
        ]))
        .unwrap();

        let stats = derive_stats(&[], &[], &[], &sales, Utc::now());
        assert_eq!(stats.total_sales, 4);
        assert!((stats.paid_revenue - 1300.50).abs() < f64::EPSILON);
    }
}
