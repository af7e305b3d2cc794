// src/commands/requests.rs
//! Enterprise signup requests awaiting review. Lists pending requests by
//! default; moderation mirrors the enterprise screen.

use anyhow::Result;
use reqwest::Method;
use serde_json::json;

use crate::api::ApiClient;
use crate::notify;
use crate::render;
use crate::types::{SignupRequest, VerificationStatus};

pub const REQUESTS_ENDPOINT: &str = "/api/v1/admin/requests";

fn status_endpoint(id: i64) -> String {
    format!("{}/{}/status", REQUESTS_ENDPOINT, id)
}

pub async fn list(client: &ApiClient, all: bool) -> Result<()> {
    let Some(mut requests) =
        super::fetch_list::<SignupRequest>(client, REQUESTS_ENDPOINT, true).await
    else {
        return Ok(());
    };
    if !all {
        requests.retain(|r| r.status == VerificationStatus::Pending);
    }
    render_list(&requests);
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
        notify::success(&format!("Demande {} {}.", id, verdict));
        if let Some(requests) =
            super::fetch_list::<SignupRequest>(client, REQUESTS_ENDPOINT, false).await
        {
            render_list(&requests);
        }
    }
    Ok(())
}

fn render_list(requests: &[SignupRequest]) {
    if requests.is_empty() {
        notify::info("Aucune demande à afficher.");
        return;
    }

    println!(
        "{:<6} {:<28} {:<30} {:<12} {:<15} {:<17}",
        "ID", "Entreprise", "Email", "Statut", "Plan demandé", "Reçue le"
    );
    println!("{}", render::rule(112));

    for request in requests {
        println!(
            "{:<6} {:<28} {:<30} {:<12} {:<15} {:<17}",
            request.id,
            render::truncate(render::opt(&request.name), 27),
            render::truncate(render::opt(&request.email), 29),
            request.status.label(),
            render::truncate(render::ref_name(&request.plan), 14),
            render::date(&request.created_at),
        );
    }
    println!("{} demande(s)", requests.len());
}
