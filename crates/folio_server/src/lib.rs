pub mod api;

use crate::api::shutdown::shutdown_signal;
use crate::api::state::AppState;
use anyhow::Context;
use api::router::create_router;
use axum::Router;
use folio_settings::FolioServerConfig;
use folio_sql::PostgresClient;
use sqlx::{Pool, Postgres};
use std::sync::Arc;
use tracing::info;

/// Create the main server
///
/// Connects to the database, runs migrations and builds the router.
///
/// # Arguments
///
/// * `config` - The server configuration
///
/// # Returns
///
/// The main server router and the shared state behind it
pub async fn create_app(
    config: FolioServerConfig,
) -> Result<(Router, Arc<AppState>), anyhow::Error> {
    let db_pool = PostgresClient::create_db_pool(&config.database_settings)
        .await
        .with_context(|| "Failed to create Postgres pool")?;

    create_app_with_pool(config, db_pool).await
}

/// Builds the router around an existing pool.
pub async fn create_app_with_pool(
    config: FolioServerConfig,
    db_pool: Pool<Postgres>,
) -> Result<(Router, Arc<AppState>), anyhow::Error> {
    let app_state = Arc::new(AppState {
        db_pool,
        config: Arc::new(config),
    });

    let router = create_router(app_state.clone())
        .await
        .with_context(|| "Failed to create router")?;

    Ok((router, app_state))
}

/// Start the main server
pub async fn start_main_server(config: FolioServerConfig) -> Result<(), anyhow::Error> {
    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    let (router, app_state) = create_app(config).await?;

    info!("🚀 Folio Server started successfully on {:?}", addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context(|| "Failed to start main server")?;

    app_state.shutdown().await;

    Ok(())
}
