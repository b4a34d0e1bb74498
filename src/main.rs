//! App Store Cache - lookup gateway for app store metadata
//!
//! Fronts the upstream metadata API with a TTL/LRU result cache and
//! uniform pagination of list results.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use appstore_cache::api::{create_router, AppState};
use appstore_cache::upstream::RapidApiClient;
use appstore_cache::{spawn_cleanup_task, Config};

/// Main entry point for the gateway.
///
/// # Startup Sequence
/// 1. Load `.env` into the process environment
/// 2. Initialize tracing subscriber and load configuration
/// 3. Create upstream client, cache store and lookup service
/// 4. Start background TTL cleanup task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() {
    // A missing .env file is fine, real environment variables still apply
    let dotenv_loaded = dotenv::dotenv().is_ok();

    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "appstore_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if !dotenv_loaded {
        info!("No .env file found, using process environment");
    }

    if let Err(err) = run().await {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Starting App Store Cache gateway");

    let config = Config::from_env().context("Invalid configuration")?;
    info!(
        "Configuration loaded: max_entries={}, default_ttl={}s, page_size={}, cache_enabled={}, port={}",
        config.max_entries,
        config.default_ttl,
        config.page_size,
        config.cache_enabled,
        config.server_port
    );

    let upstream = RapidApiClient::from_config(&config).context("Failed to build upstream client")?;
    let state = AppState::from_config(&config, Arc::new(upstream))
        .context("Failed to create cache store")?;
    info!("Lookup service initialized");

    let cleanup_handle = spawn_cleanup_task(state.service.cache(), config.cleanup_interval);
    info!("Background cleanup task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
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

    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
