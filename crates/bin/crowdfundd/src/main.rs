//! # crowdfundd: crowdfunding web server
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`crowdfund.toml` plus `CROWDFUND_*` env vars)
//! - Initialise `tracing` with the configured filter
//! - Seed the in-memory campaign repository
//! - Build the campaign service and the axum router
//! - Serve the JSON API and the compiled dashboard
//! - Shut down gracefully on SIGINT/SIGTERM
//!
//! No domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use crowdfund_adapter_http_axum::state::AppState;
use crowdfund_adapter_mock::MockCampaignRepository;
use crowdfund_app::services::campaign_service::CampaignService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let repo = MockCampaignRepository::seeded().context("seeding mock campaigns")?;
    tracing::info!(campaigns = repo.len(), "mock campaign set loaded");

    let service = Arc::new(CampaignService::new(repo));
    let state = AppState::from_arc(service);

    let assets_dir = config.assets_dir();
    match &assets_dir {
        Some(dir) if dir.join("index.html").is_file() => {
            tracing::info!(dir = %dir.display(), "serving dashboard assets");
        }
        Some(dir) => {
            tracing::warn!(
                dir = %dir.display(),
                "dashboard assets not built yet, run `trunk build` in crates/adapters/dashboard_leptos"
            );
        }
        None => tracing::info!("dashboard assets disabled, serving API only"),
    }
    let app = crowdfund_adapter_http_axum::router::build(state, assets_dir.as_deref());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!("crowdfundd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("crowdfundd stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
