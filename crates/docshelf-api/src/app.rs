//! Application builder: wires router, middleware, and state into an Axum app.

use std::sync::Arc;

use axum::Router;

use docshelf_auth::{PasswordHasher, YamlCredentialStore};
use docshelf_core::config::AppConfig;
use docshelf_core::error::{AppError, ErrorKind};
use docshelf_storage::LocalDocumentStore;

use crate::router::build_router;
use crate::state::AppState;

/// Build state backed by the configured data directory and credential file.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    let documents = LocalDocumentStore::new(&config.storage.data_dir).await?;
    let credentials = YamlCredentialStore::new(&config.auth.credentials_path, PasswordHasher::new());

    tracing::info!(
        data_dir = %config.storage.data_dir,
        credentials = %config.auth.credentials_path,
        "Stores initialized"
    );

    Ok(AppState::new(config, Arc::new(documents), Arc::new(credentials)))
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Docshelf server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Docshelf v{}", env!("CARGO_PKG_VERSION"));

    let addr = config.server.bind_address();
    let state = build_state(config).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    tracing::info!("Docshelf server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Docshelf server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
