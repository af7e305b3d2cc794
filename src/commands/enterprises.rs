// src/commands/enterprises.rs
//! Enterprise screen: list, detail, accept/decline moderation.

use anyhow::Result;
use reqwest::Method;
use serde_json::json;

use crate::api::{ApiClient, ApiError};
use crate::notify;
use crate::render;
use crate::types::{normalize_item, Enterprise, VerificationStatus};

pub const ENTERPRISES_ENDPOINT: &str = "/api/v1/admin/enterprises";

fn enterprise_endpoint(id: i64) -> String {
    format!("{}/{}", ENTERPRISES_ENDPOINT, id)
}

fn status_endpoint(id: i64) -> String {
    format!("{}/{}/status", ENTERPRISES_ENDPOINT, id)
}

pub async fn list(client: &ApiClient, status: Option<VerificationStatus>) -> Result<()> {
    let Some(mut enterprises) =
        super::fetch_list::<Enterprise>(client, ENTERPRISES_ENDPOINT, true).await
    else {
        return Ok(());
    };
    if let Some(wanted) = status {
        enterprises.retain(|e| e.status == wanted);
    }
    render_list(&enterprises);
    Ok(())
}

pub async fn show(client: &ApiClient, id: i64) -> Result<()> {
    let payload = match client.get(&enterprise_endpoint(id)).await {
        Ok(payload) => payload,
        Err(_) => return Ok(()),
    };
    match normalize_item::<Enterprise>(payload) {
        Ok(enterprise) => render_detail(&enterprise),
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
        notify::success(&format!("Entreprise {} {}.", id, verdict));
        if let Some(enterprises) =
            super::fetch_list::<Enterprise>(client, ENTERPRISES_ENDPOINT, false).await
        {
            render_list(&enterprises);
        }
    }
    Ok(())
}

fn render_list(enterprises: &[Enterprise]) {
    if enterprises.is_empty() {
        notify::info("Aucune entreprise à afficher.");
        return;
    }

    println!(
        "{:<6} {:<25} {:<30} {:<15} {:<12} {:<15}",
        "ID", "Nom", "Email", "Ville", "Statut", "Plan"
    );
    println!("{}", render::rule(108));

    for enterprise in enterprises {
        println!(
            "{:<6} {:<25} {:<30} {:<15} {:<12} {:<15}",
            enterprise.id,
            render::truncate(render::opt(&enterprise.name), 24),
            render::truncate(render::opt(&enterprise.email), 29),
            render::truncate(render::opt(&enterprise.city), 14),
            enterprise.status.label(),
            render::truncate(render::ref_name(&enterprise.plan), 14),
        );
    }
    println!("{} entreprise(s)", enterprises.len());
}

fn render_detail(enterprise: &Enterprise) {
    println!("Entreprise {}", enterprise.id);
    render::field("Nom", render::opt(&enterprise.name));
    render::field("Email", render::opt(&enterprise.email));
    render::field("Téléphone", render::opt(&enterprise.phone));
    render::field("Adresse", render::opt(&enterprise.address));
    render::field("Ville", render::opt(&enterprise.city));
    render::field("ICE", render::opt(&enterprise.ice));
    render::field("RC", render::opt(&enterprise.rc));
    render::field("Secteur", render::ref_name(&enterprise.sector));
    render::field("Plan", render::ref_name(&enterprise.plan));
    render::field("Statut", enterprise.status.label());
    render::field("Inscrite le", &render::date(&enterprise.created_at));
}
