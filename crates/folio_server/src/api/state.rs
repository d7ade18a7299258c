use folio_settings::FolioServerConfig;
use sqlx::{Pool, Postgres};
use std::sync::Arc;

pub struct AppState {
    pub db_pool: Pool<Postgres>,
    pub config: Arc<FolioServerConfig>,
}

impl AppState {
    /// Shutdown the application gracefully
    pub async fn shutdown(&self) {
        self.db_pool.close().await;
    }
}
