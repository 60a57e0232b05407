//! AgriMarket API server
//!
//! Serves the labour, machine and produce listings over HTTP, backed by
//! the in-memory record store.
//!
//! Usage:
//!   agrimarket-api --port 8080 --seed full

use std::net::IpAddr;
use std::sync::Arc;

use agrimarket_api::{ApiConfig, DEFAULT_PORT, SeedMode, build_router};
use agrimarket_services::Marketplace;
use agrimarket_services::seed::{seed_quick_samples, seed_sample_labours};
use agrimarket_store::{MemoryStore, RecordStore};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "agrimarket-api")]
#[command(about = "AgriMarket listings HTTP API")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "AGRIMARKET_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to bind
    #[arg(short, long, env = "AGRIMARKET_BIND", default_value = "0.0.0.0")]
    bind: IpAddr,

    /// Sample labour listings to load before serving
    #[arg(long, value_enum, default_value_t = SeedMode::None)]
    seed: SeedMode,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for ApiConfig {
    fn from(args: Args) -> Self {
        Self {
            bind: args.bind,
            port: args.port,
            seed: args.seed,
            verbose: args.verbose,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ApiConfig::from(Args::parse());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("AgriMarket API starting...");
    let store: Arc<dyn RecordStore> = Arc::new(MemoryStore::new());
    info!("Record store: {}", store.backend_name());

    let report = match config.seed {
        SeedMode::None => None,
        SeedMode::Full => Some(seed_sample_labours(store.as_ref()).await),
        SeedMode::Quick => Some(seed_quick_samples(store.as_ref()).await),
    };
    if let Some(report) = report {
        if report.inserted < report.attempted {
            warn!("Seeding incomplete: {}", report.message());
        }
    }

    let app = build_router(Marketplace::new(store));
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("HTTP API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("AgriMarket API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
