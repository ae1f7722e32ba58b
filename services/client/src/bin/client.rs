//! services/client/src/bin/client.rs
//!
//! Startup wiring: configuration, logging, the HTTP catalog adapter, the
//! one-time catalog load, then a command loop. Commands arrive as
//! newline-delimited JSON on stdin, e.g.
//! `{"type":"search_by_date","date":"2015-06-03"}`.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use client_lib::{
    adapters::NasaPhotoCatalog, app::Session, config::Config, error::AppError,
    render::LogRenderer, Command,
};
use rover_story_core::Catalog;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded.");

    // --- 2. Build the Catalog Adapter & Load the Source List ---
    // The load is a hard prerequisite: without activity windows no search
    // can be validated, so a failure here ends the session.
    let port = Arc::new(NasaPhotoCatalog::new(
        config.api_base.clone(),
        config.api_key.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?);

    info!("Loading source catalog...");
    let catalog = match Catalog::load(port.as_ref()).await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(error = %e, "Could not load the photo catalog; nothing to search");
            return Err(e.into());
        }
    };
    info!(sources = catalog.windows().len(), "Catalog loaded.");

    // --- 3. Run the Command Loop ---
    let mut session = Session::new(catalog, port, Arc::new(LogRenderer));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let command: Command = match serde_json::from_str(line) {
            Ok(command) => command,
            Err(e) => {
                error!(error = %e, "Unrecognized command");
                continue;
            }
        };
        // Recoverable conditions were already rendered by the session;
        // log the failure and keep accepting commands.
        if let Err(e) = session.handle(command).await {
            error!(error = %e, "Command failed");
        }
    }

    info!("Input closed; ending session.");
    Ok(())
}
