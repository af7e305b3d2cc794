// src/commands/sales.rs
//! Sales and payments screen: listing with an in-memory status filter and
//! a locally computed revenue total.

use anyhow::Result;

use crate::api::ApiClient;
use crate::notify;
use crate::render;
use crate::types::Sale;

pub const SALES_ENDPOINT: &str = "/api/v1/admin/sales";

pub async fn list(client: &ApiClient, status: Option<&str>) -> Result<()> {
    let Some(mut sales) = super::fetch_list::<Sale>(client, SALES_ENDPOINT, true).await else {
        return Ok(());
    };
    if let Some(wanted) = status {
        sales.retain(|s| {
            s.status
                .as_deref()
                .map(|actual| actual.eq_ignore_ascii_case(wanted))
                .unwrap_or(false)
        });
    }
    render_list(&sales);
    Ok(())
}

fn render_list(sales: &[Sale]) {
    if sales.is_empty() {
        notify::info("Aucun paiement à afficher.");
        return;
    }

    println!(
        "{:<6} {:<25} {:<15} {:<12} {:<10} {:<17}",
        "ID", "Entreprise", "Plan", "Montant", "Statut", "Date"
    );
    println!("{}", render::rule(100));

    for sale in sales {
        println!(
            "{:<6} {:<25} {:<15} {:<12} {:<10} {:<17}",
            sale.id,
            render::truncate(render::ref_name(&sale.enterprise), 24),
            render::truncate(render::ref_name(&sale.plan), 14),
            render::amount(&sale.amount),
            render::opt(&sale.status),
            render::date(&sale.created_at),
        );
    }

    let revenue: f64 = sales
        .iter()
        .filter(|s| s.is_paid())
        .filter_map(|s| s.amount)
        .sum();
    println!("{} paiement(s), encaissé {:.2} MAD", sales.len(), revenue);
}
