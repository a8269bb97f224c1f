use anyhow::{Context, Result};
use std::sync::Arc;
use viewer_count_core::{DEFAULT_BIND_HOST, ServerConfig};
use viewer_count_http::{AppState, create_router};
use viewer_count_service::CountService;
use viewer_count_storage::{PgStorage, ViewerStore};

pub(crate) async fn run(config: ServerConfig) -> Result<()> {
    tracing::info!("Connecting to the database");
    let storage = PgStorage::new(&config.db_connection_string)
        .await
        .context("failed to connect to the database")?;
    storage.ping().await.context("failed to ping the database")?;
    tracing::info!("Connected to the database");

    let store: Arc<dyn ViewerStore> = Arc::new(storage);
    let state = Arc::new(AppState::new(Arc::new(CountService::new(store))));
    let router = create_router(state);

    let addr = format!("{DEFAULT_BIND_HOST}:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Starting HTTP server on {}", addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error while serving traffic")?;
    tracing::info!("Server shutdown");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining requests");
}
