// src/commands/auth.rs
//! Login and logout commands.

use anyhow::{Context, Result};
use std::io::Write;

use crate::api::ApiClient;
use crate::notify;

pub async fn login(client: &ApiClient, email: &str) -> Result<()> {
    let password = match std::env::var("FACEJOB_ADMIN_PASSWORD") {
        Ok(password) => password,
        Err(_) => prompt_password()?,
    };

    match client.login(email, &password).await {
        Ok(session) => notify::success(&format!("Connecté en tant que {}.", session.email)),
        Err(e) => notify::error(&e.to_string()),
    }
    Ok(())
}

pub async fn logout(client: &ApiClient) -> Result<()> {
    match client.logout().await {
        Ok(()) => notify::success("Déconnecté. Session locale effacée."),
        Err(e) => notify::error(&e.to_string()),
    }
    Ok(())
}

fn prompt_password() -> Result<String> {
    print!("Mot de passe: ");
    std::io::stdout()
        .flush()
        .context("Failed to flush prompt")?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read password")?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}
