#![warn(clippy::pedantic)]

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use liftplan_domain::{Catalog, Service};
use liftplan_server::{AppState, ProgramRoutes, Settings, log as app_log};
use liftplan_storage::MemoryStorage;
use log::{error, info, warn};

/// Serves generated weekly workout programs.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON settings file
    #[arg(short, long, env = "LIFTPLAN_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the settings file
    #[arg(short, long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref()).context("failed to load settings")?;
    if let Some(bind) = args.bind {
        settings.bind = bind;
    }

    let entries = Arc::new(app_log::Ring::default());
    app_log::init(entries.clone(), settings.level_filter()?)
        .map_err(|err| anyhow!("failed to initialize logger: {err}"))?;

    let catalog = Catalog::builtin();
    info!(
        "loaded catalog version {} with {} exercises",
        catalog.version(),
        catalog.exercises().len()
    );
    let storage = match &settings.data_file {
        Some(path) => MemoryStorage::open(catalog, path)
            .with_context(|| format!("failed to open data file {}", path.display()))?,
        None => MemoryStorage::new(catalog),
    };
    if settings.tokens.is_empty() {
        warn!("no tokens configured, all authenticated requests will be rejected");
    }

    let state = Arc::new(AppState::new(Service::new(storage), &settings, entries));
    let listener = tokio::net::TcpListener::bind(settings.bind)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind))?;
    info!("listening on {}", settings.bind);

    axum::serve(listener, ProgramRoutes::routes(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
    }
}
