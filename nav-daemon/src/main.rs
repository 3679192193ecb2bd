//! nav-daemon - campus navigation backend.
//!
//! A single Rust binary that provides:
//! - Admin HTTP API for editing the location graph
//! - Shortest-path queries over frozen graph snapshots
//! - GPS metadata for locations

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use nav_daemon::server::{create_router, AppState};
use nav_daemon::storage::{GraphFile, LocationStore};

/// Campus navigation daemon
#[derive(Parser, Debug)]
#[command(name = "nav-daemon")]
#[command(about = "HTTP backend for campus navigation")]
#[command(version)]
struct Cli {
    /// Directory holding graph.json and gps_locations.json
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// HTTP port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Graph file (defaults to <data-dir>/graph.json)
    #[arg(long)]
    graph_file: Option<PathBuf>,

    /// GPS locations file (defaults to <data-dir>/gps_locations.json)
    #[arg(long)]
    locations_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    let graph_path = cli
        .graph_file
        .unwrap_or_else(|| cli.data_dir.join("graph.json"));
    let locations_path = cli
        .locations_file
        .unwrap_or_else(|| cli.data_dir.join("gps_locations.json"));

    info!("Starting campus navigation daemon");
    info!("Graph file: {:?}", graph_path);
    info!("GPS file: {:?}", locations_path);

    let graph_file = GraphFile::new(graph_path);
    let store = graph_file
        .load()
        .with_context(|| format!("loading graph from {}", graph_file.path().display()))?;
    info!(
        "Graph loaded: {} locations, {} paths",
        store.node_count(),
        store.edge_count()
    );

    let locations = LocationStore::load(&locations_path)
        .with_context(|| format!("loading GPS locations from {}", locations_path.display()))?;
    info!("GPS locations loaded: {}", locations.len());

    let state = AppState::new(store, graph_file, locations);
    let router = create_router(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("nav-daemon listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("nav-daemon stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
