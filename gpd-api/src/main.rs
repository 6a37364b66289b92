//! gpd-api - Global Populism Database query service
//!
//! Loads the leader-term dataset once at startup and serves filter,
//! aggregation and ranking endpoints over it.

use anyhow::{Context, Result};
use clap::Parser;
use gpd_api::summarizer::HttpSummarizer;
use gpd_api::{build_router, AppState};
use gpd_common::config::{ConfigOverrides, ServiceConfig};
use gpd_common::Dataset;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

/// Command-line arguments for gpd-api
#[derive(Parser, Debug)]
#[command(name = "gpd-api")]
#[command(about = "Global Populism Database query service")]
#[command(version)]
struct Args {
    /// Configuration file (default: ~/.config/gpd/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Wide-format dataset CSV
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Directory holding speech text files
    #[arg(long)]
    speeches_dir: Option<PathBuf>,

    /// Directory of frontend assets
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

impl From<Args> for ConfigOverrides {
    fn from(args: Args) -> Self {
        Self {
            config_path: args.config,
            host: args.host,
            port: args.port,
            dataset_path: args.dataset,
            speeches_dir: args.speeches_dir,
            static_dir: args.static_dir,
            log_level: args.log_level,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = ServiceConfig::resolve(args.into()).context("Failed to resolve configuration")?;

    // RUST_LOG wins over the configured level
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                let level = &config.log_level;
                format!("gpd_api={level},gpd_common={level},tower_http={level}").into()
            }),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Global Populism Database API (gpd-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    match &config.config_file {
        Some(path) => info!("Configuration file: {}", path.display()),
        None => info!("No configuration file loaded, using defaults"),
    }
    info!("Dataset path: {}", config.dataset_path.display());

    let dataset = match Dataset::load_csv(&config.dataset_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Error loading data: {}", e);
            return Err(e).context("Failed to load dataset");
        }
    };
    if dataset.is_empty() {
        warn!("Dataset is empty; every query will return no rows");
    }

    if !config.speeches_dir.is_dir() {
        warn!(
            "Speeches directory {} not found; speech text endpoints will return 404",
            config.speeches_dir.display()
        );
    }

    let mut state = AppState::new(dataset, config.speeches_dir.clone());
    match HttpSummarizer::from_config(&config.summarizer) {
        Ok(Some(summarizer)) => {
            info!("Speech analysis enabled ({} models)", summarizer.model_count());
            state = state.with_summarizer(Arc::new(summarizer), config.summarizer.max_words);
        }
        Ok(None) => info!("Speech analysis disabled (no summarizer endpoint configured)"),
        Err(e) => warn!("Speech analysis disabled: {}", e),
    }

    let app = build_router(state, Some(config.static_dir.clone()));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("gpd-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
