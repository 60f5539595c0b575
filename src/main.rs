use std::net::SocketAddr;
use std::sync::Arc;

use goal_tracker::{AppState, Config, MetricsRegistry, PgGoalStore, Result, create_router};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;
    tracing::info!(
        "Database {}:{}/{} as '{}'",
        config.database.host,
        config.database.port,
        config.database.dbname,
        config.database.username
    );

    // No retry: a database that is down at startup stops the service.
    let store = match PgGoalStore::connect(&config.database, &config.pool).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Error connecting to PostgreSQL: {}", e);
            return Ok(());
        }
    };
    tracing::info!("Connected to PostgreSQL");

    // Created once, before the listener accepts anything.
    let metrics = MetricsRegistry::new();

    let state = Arc::new(
        AppState::new(config.clone(), metrics, Arc::new(store.clone())).map_err(|e| {
            tracing::error!("Failed to load templates: {}", e);
            e
        })?,
    );

    // Shutdown channel, flipped by Ctrl+C
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let app = create_router(state);

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Goal tracker starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET  /goals       - Goal list");
    tracing::info!("  - POST /add_goal    - Add a goal");
    tracing::info!("  - POST /remove_goal - Remove a goal");
    tracing::info!("  - GET  /health      - Health check");
    tracing::info!("  - GET  /metrics     - Prometheus metrics");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    store.close().await;
    Ok(())
}

fn setup_tracing() {
    // RUST_LOG wins; "info" otherwise.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
