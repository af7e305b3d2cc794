// src/render.rs
//! Terminal rendering helpers for the admin screens. Pure formatting over
//! in-memory lists; nothing here talks to the network.

use chrono::{DateTime, Utc};

/// Optional text field, `-` when absent.
pub fn opt(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("-")
}

/// Optional id reference, `-` when absent.
pub fn opt_id(field: &Option<i64>) -> String {
    field.map_or_else(|| "-".to_string(), |id| id.to_string())
}

/// Name of an embedded relation, `-` when the backend sent none.
pub fn ref_name(field: &Option<crate::types::NamedRef>) -> &str {
    field
        .as_ref()
        .and_then(|r| r.name.as_deref())
        .unwrap_or("-")
}

/// Short date for table cells.
pub fn date(field: &Option<DateTime<Utc>>) -> String {
    field.map_or_else(
        || "-".to_string(),
        |d| d.format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// Money cell. Amounts are dirhams with two decimals.
pub fn amount(field: &Option<f64>) -> String {
    field.map_or_else(|| "-".to_string(), |a| format!("{:.2}", a))
}

/// Clip long free text to `max` characters for a table cell.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max.saturating_sub(3)).collect();
    clipped.push_str("...");
    clipped
}

/// Horizontal rule under a table header.
pub fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// One `   Label: value` line of a detail card.
pub fn field(label: &str, value: &str) {
    println!("   {}: {}", label, value);
}
