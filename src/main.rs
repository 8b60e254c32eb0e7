//! Text Metrics - a text analysis server with per-document metric caching
//!
//! Stores short text documents per owner and serves derived metrics
//! through a read-through cache invalidated on every mutation.

mod analyzer;
mod api;
mod cache;
mod config;
mod error;
mod models;
mod service;
mod store;
mod tasks;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use cache::MemoryCache;
use config::Config;
use service::AnalysisService;
use store::MemoryStore;
use tasks::spawn_cleanup_task;

/// Main entry point for the Text Metrics server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the document store and metric cache backends
/// 4. Wire the analysis service over the backends
/// 5. Start the background TTL cleanup task
/// 6. Create Axum router with all endpoints
/// 7. Start HTTP server on configured port
/// 8. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "text_metrics=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Text Metrics Server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, metric_ttl={}s, cleanup_interval={}s, max_cache_entries={}",
        config.server_port, config.metric_ttl, config.cleanup_interval, config.max_cache_entries
    );

    // Wire the service over the bundled backends
    let store = Arc::new(MemoryStore::new());
    let cache = Arc::new(MemoryCache::new(config.max_cache_entries));
    let service = Arc::new(AnalysisService::new(store, cache.clone(), &config));
    let state = AppState::new(service, cache.clone());
    info!("Analysis service initialized");

    // Start background cleanup task
    let cleanup_handle = spawn_cleanup_task(cache, config.cleanup_interval);
    info!("Background cleanup task started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort the cleanup task
    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
