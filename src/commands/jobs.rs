// src/commands/jobs.rs
//! Job posting screen: list, detail, accept/decline, delete.

use anyhow::Result;
use reqwest::Method;
use serde_json::json;

use crate::api::{ApiClient, ApiError};
use crate::notify;
use crate::render;
use crate::types::{normalize_item, Job, VerificationStatus};

pub const JOBS_ENDPOINT: &str = "/api/v1/admin/jobs";

fn job_endpoint(id: i64) -> String {
    format!("{}/{}", JOBS_ENDPOINT, id)
}

fn status_endpoint(id: i64) -> String {
    format!("{}/{}/status", JOBS_ENDPOINT, id)
}

pub async fn list(client: &ApiClient) -> Result<()> {
    let Some(jobs) = super::fetch_list::<Job>(client, JOBS_ENDPOINT, true).await else {
        return Ok(());
    };
    render_list(&jobs);
    Ok(())
}

pub async fn show(client: &ApiClient, id: i64) -> Result<()> {
    let payload = match client.get(&job_endpoint(id)).await {
        Ok(payload) => payload,
        Err(_) => return Ok(()),
    };
    match normalize_item::<Job>(payload) {
        Ok(job) => render_detail(&job),
        Err(e) => notify::error(&ApiError::from(e).to_string()),
    }
    Ok(())
}

pub async fn set_status(client: &ApiClient, id: i64, status: VerificationStatus) -> Result<()> {
    let body = json!({ "status": status });
    if client
        .mutate(Method::PATCH, &status_endpoint(id), body)
        .await
        .is_ok()
    {
        let verdict = match status {
            VerificationStatus::Accepted => "acceptée",
            VerificationStatus::Declined => "refusée",
            VerificationStatus::Pending => "remise en attente",
        };
        notify::success(&format!("Offre {} {}.", id, verdict));
        refetch(client).await;
    }
    Ok(())
}

pub async fn remove(client: &ApiClient, id: i64) -> Result<()> {
    if client.delete(&job_endpoint(id)).await.is_ok() {
        notify::success(&format!("Offre {} supprimée.", id));
        refetch(client).await;
    }
    Ok(())
}

async fn refetch(client: &ApiClient) {
    if let Some(jobs) = super::fetch_list::<Job>(client, JOBS_ENDPOINT, false).await {
        render_list(&jobs);
    }
}

fn render_list(jobs: &[Job]) {
    if jobs.is_empty() {
        notify::info("Aucune offre à afficher.");
        return;
    }

    println!(
        "{:<6} {:<32} {:<25} {:<12} {:<12} {:<12}",
        "ID", "Titre", "Entreprise", "Statut", "Début", "Fin"
    );
    println!("{}", render::rule(104));

    for job in jobs {
        println!(
            "{:<6} {:<32} {:<25} {:<12} {:<12} {:<12}",
            job.id,
            render::truncate(render::opt(&job.title), 31),
            render::truncate(render::ref_name(&job.enterprise), 24),
            job.status.label(),
            short_date(&job.starts_on),
            short_date(&job.ends_on),
        );
    }
    println!("{} offre(s)", jobs.len());
}

fn short_date(field: &Option<chrono::DateTime<chrono::Utc>>) -> String {
    field.map_or_else(|| "-".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

fn render_detail(job: &Job) {
    println!("Offre {}", job.id);
    render::field("Titre", render::opt(&job.title));
    render::field("Entreprise", render::ref_name(&job.enterprise));
    render::field("Secteur", render::ref_name(&job.sector));
    render::field("Statut", job.status.label());
    render::field("Début", &short_date(&job.starts_on));
    render::field("Fin", &short_date(&job.ends_on));
    render::field("Publiée le", &render::date(&job.created_at));
    if let Some(description) = &job.description {
        render::field("Description", &render::truncate(description, 300));
    }
}
