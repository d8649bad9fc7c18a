//! HTTP server initialization and runtime setup.
//!
//! Opens the slug store, wires the services, and runs the Axum server until
//! Ctrl-C.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::{FileSlugRepository, StorageLock};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Exclusive lock on the storage file, held until shutdown
/// - Slug store from the storage file (missing file means empty)
/// - Link service with the shared secret
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Another server or admin process holds the storage file
/// - The storage file exists but cannot be read
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let _lock = StorageLock::acquire(&config.storage_file).with_context(|| {
        format!(
            "Failed to lock storage file {}",
            config.storage_file.display()
        )
    })?;

    let repository = FileSlugRepository::open(&config.storage_file, config.slug_length)
        .await
        .with_context(|| {
            format!(
                "Failed to read storage file {}",
                config.storage_file.display()
            )
        })?;

    let repository = Arc::new(repository);
    let link_service = LinkService::new(repository, &config.secret, config.public_base());

    tracing::info!(
        "Starting... we have {} URLs shortened so far",
        link_service.count().await
    );

    let state = AppState::new(Arc::new(link_service));
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr()))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
