// src/main.rs
use anyhow::Result;
use clap::Parser;

use admin_console::cli::{self, Cli};
use admin_console::{ApiClient, ConsoleConfig};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout belongs to the rendered screens.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Cli::parse();

    let config = ConsoleConfig::load(args.home.clone())?;
    config.ensure_home()?;
    let client = ApiClient::new(&config)?;

    cli::dispatch(args.command, &client).await
}
