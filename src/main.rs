//! Customer MS - a customer record service
//!
//! CRUD operations over customer records, backed by SQLite and fronted by a
//! pair of bounded TTL caches.

mod api;
mod cache;
mod config;
mod db;
mod error;
mod models;
mod repository;
mod service;
mod tasks;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use repository::SqliteCustomerRepository;
use service::CustomerService;
use tasks::spawn_cleanup_task;

/// Main entry point for the customer service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect the SQLite pool and create the schema
/// 4. Build the service with its cache pair
/// 5. Start the background cache sweep task
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
                .unwrap_or_else(|_| "customer_ms=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Customer Service");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_capacity={}, cache_ttl={}s, port={}, cleanup_interval={}s",
        config.cache_capacity, config.cache_ttl, config.server_port, config.cleanup_interval
    );

    // Connect the store and make sure the schema exists
    let pool = db::init_pool(&config.database_url)
        .await
        .context("failed to connect to the database")?;
    db::create_schema(&pool)
        .await
        .context("failed to create the schema")?;
    info!("Database initialized");

    // Build the service and application state
    let repo = Arc::new(SqliteCustomerRepository::new(pool));
    let service = Arc::new(CustomerService::new(
        repo,
        config.cache_capacity,
        config.cache_ttl,
    ));
    let state = AppState::new(service.clone());

    // Start background sweep task
    let cleanup_handle = spawn_cleanup_task(service, config.cleanup_interval);
    info!("Background sweep task started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind server port")?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task and allows graceful shutdown.
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

    // Abort the sweep task
    cleanup_handle.abort();
    warn!("Sweep task aborted");
}
