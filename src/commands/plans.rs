// src/commands/plans.rs
//! Subscription plan screen: list and full CRUD.

use anyhow::Result;
use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::api::ApiClient;
use crate::notify;
use crate::render;
use crate::types::Plan;

pub const PLANS_ENDPOINT: &str = "/api/v1/admin/plans";

fn plan_endpoint(id: i64) -> String {
    format!("{}/{}", PLANS_ENDPOINT, id)
}

pub async fn list(client: &ApiClient) -> Result<()> {
    let Some(plans) = super::fetch_list::<Plan>(client, PLANS_ENDPOINT, true).await else {
        return Ok(());
    };
    render_list(&plans);
    Ok(())
}

pub async fn create(
    client: &ApiClient,
    name: &str,
    price: f64,
    duration_days: i64,
    description: Option<&str>,
) -> Result<()> {
    let mut body = json!({
        "name": name,
        "price": price,
        "duration_days": duration_days,
    });
    if let Some(text) = description {
        body["description"] = Value::String(text.to_string());
    }

    if client.mutate(Method::POST, PLANS_ENDPOINT, body).await.is_ok() {
        notify::success(&format!("Plan « {} » créé.", name));
        refetch(client).await;
    }
    Ok(())
}

pub async fn update(
    client: &ApiClient,
    id: i64,
    name: Option<&str>,
    price: Option<f64>,
    duration_days: Option<i64>,
    description: Option<&str>,
) -> Result<()> {
    let mut fields = Map::new();
    if let Some(name) = name {
        fields.insert("name".to_string(), Value::String(name.to_string()));
    }
    if let Some(price) = price {
        fields.insert("price".to_string(), json!(price));
    }
    if let Some(days) = duration_days {
        fields.insert("duration_days".to_string(), json!(days));
    }
    if let Some(text) = description {
        fields.insert(
            "description".to_string(),
            Value::String(text.to_string()),
        );
    }

    if fields.is_empty() {
        notify::warning("Rien à mettre à jour.");
        return Ok(());
    }

    if client
        .mutate(Method::PUT, &plan_endpoint(id), Value::Object(fields))
        .await
        .is_ok()
    {
        notify::success(&format!("Plan {} mis à jour.", id));
        refetch(client).await;
    }
    Ok(())
}

pub async fn remove(client: &ApiClient, id: i64) -> Result<()> {
    if client.delete(&plan_endpoint(id)).await.is_ok() {
        notify::success(&format!("Plan {} supprimé.", id));
        refetch(client).await;
    }
    Ok(())
}

async fn refetch(client: &ApiClient) {
    if let Some(plans) = super::fetch_list::<Plan>(client, PLANS_ENDPOINT, false).await {
        render_list(&plans);
    }
}

fn render_list(plans: &[Plan]) {
    if plans.is_empty() {
        notify::info("Aucun plan à afficher.");
        return;
    }

    println!(
        "{:<6} {:<25} {:<12} {:<10} {:<40}",
        "ID", "Nom", "Prix (MAD)", "Durée (j)", "Description"
    );
    println!("{}", render::rule(96));

    for plan in plans {
        println!(
            "{:<6} {:<25} {:<12} {:<10} {:<40}",
            plan.id,
            render::truncate(render::opt(&plan.name), 24),
            render::amount(&plan.price),
            render::opt_id(&plan.duration_days),
            render::truncate(render::opt(&plan.description), 39),
        );
    }
    println!("{} plan(s)", plans.len());
}
