//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, R2Signer};
use crate::services::Services;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");
    let config = config.with_listen(args.host, args.port);

    let db = Arc::new(Database::connect(&config).await?);

    // One S3 client for the process lifetime
    let signer = Arc::new(R2Signer::new(&config.storage).await);
    tracing::info!(
        bucket = %config.storage.public_bucket,
        prefix = %config.storage.project_prefix(),
        "Object storage signer ready"
    );

    let services = Services::from_connection(db.get_connection(), signer, config.storage.clone());
    let app_state = AppState::from_config(&services, db, &config);

    let app = create_router(app_state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
