// src/commands/videos.rs
//! Video CV screen: list and accept/decline moderation.

use anyhow::Result;
use reqwest::Method;
use serde_json::json;

use crate::api::ApiClient;
use crate::notify;
use crate::render;
use crate::types::{VerificationStatus, VideoCv};

pub const VIDEOS_ENDPOINT: &str = "/api/v1/admin/videos";

fn status_endpoint(id: i64) -> String {
    format!("{}/{}/status", VIDEOS_ENDPOINT, id)
}

pub async fn list(client: &ApiClient) -> Result<()> {
    let Some(videos) = super::fetch_list::<VideoCv>(client, VIDEOS_ENDPOINT, true).await else {
        return Ok(());
    };
    render_list(&videos);
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
        notify::success(&format!("Vidéo {} {}.", id, verdict));
        if let Some(videos) = super::fetch_list::<VideoCv>(client, VIDEOS_ENDPOINT, false).await {
            render_list(&videos);
        }
    }
    Ok(())
}

fn render_list(videos: &[VideoCv]) {
    if videos.is_empty() {
        notify::info("Aucune vidéo à afficher.");
        return;
    }

    println!(
        "{:<6} {:<25} {:<12} {:<17} {:<40}",
        "ID", "Candidat", "Statut", "Déposée le", "Lien"
    );
    println!("{}", render::rule(103));

    for video in videos {
        println!(
            "{:<6} {:<25} {:<12} {:<17} {:<40}",
            video.id,
            render::truncate(&video.candidate_name(), 24),
            video.status.label(),
            render::date(&video.created_at),
            render::truncate(render::opt(&video.video_url), 39),
        );
    }
    println!("{} vidéo(s)", videos.len());
}
