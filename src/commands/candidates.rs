// src/commands/candidates.rs
//! Candidate screen: list, detail, delete, CSV export.

use anyhow::Result;
use std::path::Path;

use crate::api::{ApiClient, ApiError};
use crate::notify;
use crate::render;
use crate::types::{normalize_item, Candidate};

pub const CANDIDATES_ENDPOINT: &str = "/api/v1/admin/candidates";

fn candidate_endpoint(id: i64) -> String {
    format!("{}/{}", CANDIDATES_ENDPOINT, id)
}

pub async fn list(client: &ApiClient, sector: Option<i64>) -> Result<()> {
    let Some(mut candidates) =
        super::fetch_list::<Candidate>(client, CANDIDATES_ENDPOINT, true).await
    else {
        return Ok(());
    };
    if let Some(sector_id) = sector {
        candidates.retain(|c| c.sector_id == Some(sector_id));
    }
    render_list(&candidates);
    Ok(())
}

pub async fn show(client: &ApiClient, id: i64) -> Result<()> {
    let payload = match client.get(&candidate_endpoint(id)).await {
        Ok(payload) => payload,
        Err(_) => return Ok(()),
    };
    match normalize_item::<Candidate>(payload) {
        Ok(candidate) => render_detail(&candidate),
        Err(e) => notify::error(&ApiError::from(e).to_string()),
    }
    Ok(())
}

pub async fn remove(client: &ApiClient, id: i64) -> Result<()> {
    if client.delete(&candidate_endpoint(id)).await.is_ok() {
        notify::success(&format!("Candidat {} supprimé.", id));
        if let Some(candidates) =
            super::fetch_list::<Candidate>(client, CANDIDATES_ENDPOINT, false).await
        {
            render_list(&candidates);
        }
    }
    Ok(())
}

pub async fn export_csv(client: &ApiClient, output: &Path) -> Result<()> {
    let Some(candidates) =
        super::fetch_list::<Candidate>(client, CANDIDATES_ENDPOINT, false).await
    else {
        return Ok(());
    };
    let path = crate::export::candidates_csv(&candidates, output)?;
    notify::success(&format!(
        "{} candidat(s) exporté(s) vers {}",
        candidates.len(),
        path.display()
    ));
    Ok(())
}

fn render_list(candidates: &[Candidate]) {
    if candidates.is_empty() {
        notify::info("Aucun candidat à afficher.");
        return;
    }

    println!(
        "{:<6} {:<24} {:<30} {:<15} {:<8} {:<17}",
        "ID", "Nom", "Email", "Ville", "Statut", "Inscrit le"
    );
    println!("{}", render::rule(104));

    for candidate in candidates {
        println!(
            "{:<6} {:<24} {:<30} {:<15} {:<8} {:<17}",
            candidate.id,
            render::truncate(&candidate.full_name(), 23),
            render::truncate(render::opt(&candidate.email), 29),
            render::truncate(render::opt(&candidate.city), 14),
            if candidate.is_active() { "Actif" } else { "Inactif" },
            render::date(&candidate.created_at),
        );
    }
    println!("{} candidat(s)", candidates.len());
}

fn render_detail(candidate: &Candidate) {
    println!("Candidat {}", candidate.id);
    render::field("Nom", &candidate.full_name());
    render::field("Email", render::opt(&candidate.email));
    render::field("Téléphone", render::opt(&candidate.phone));
    render::field("Ville", render::opt(&candidate.city));
    render::field("Secteur", render::ref_name(&candidate.sector));
    render::field(
        "Statut",
        if candidate.is_active() {
            "Actif"
        } else {
            "Inactif"
        },
    );
    render::field("Inscrit le", &render::date(&candidate.created_at));
    if let Some(bio) = &candidate.bio {
        render::field("Bio", &render::truncate(bio, 200));
    }
}
