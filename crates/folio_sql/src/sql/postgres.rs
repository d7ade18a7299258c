use crate::sql::error::SqlError;
use crate::sql::traits::{CitySetSqlLogic, PhotoSqlLogic, PostSqlLogic, SummarySqlLogic};
use folio_settings::DatabaseSettings;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};
use tracing::{debug, error, info, instrument};

/// Entry point for every folio query. All logic lives in the `*SqlLogic`
/// traits, which take the pool explicitly.
#[derive(Debug, Clone)]
pub struct PostgresClient {}

impl PostgresClient {
    /// Connects to Postgres and brings the schema up to date.
    ///
    /// # Arguments
    ///
    /// * `database_settings` - connection uri and pool sizing
    ///
    /// # Returns
    ///
    /// * `Result<Pool<Postgres>, SqlError>` - Result of the database pool
    #[instrument(skip(database_settings))]
    pub async fn create_db_pool(
        database_settings: &DatabaseSettings,
    ) -> Result<Pool<Postgres>, SqlError> {
        let pool = PgPoolOptions::new()
            .max_connections(database_settings.max_connections)
            .acquire_timeout(database_settings.acquire_timeout())
            .connect(&database_settings.connection_uri)
            .await
            .map_err(|err| {
                error!("🚨 Failed to connect to database {:?}", err);
                SqlError::ConnectionError(err.to_string())
            })?;

        info!("✅ Successfully connected to database");

        Self::run_migrations(&pool).await?;

        Ok(pool)
    }

    pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), SqlError> {
        info!("Running migrations");
        sqlx::migrate!("src/migrations").run(pool).await?;

        debug!("Migrations complete");

        Ok(())
    }
}

impl PhotoSqlLogic for PostgresClient {}
impl PostSqlLogic for PostgresClient {}
impl CitySetSqlLogic for PostgresClient {}
impl SummarySqlLogic for PostgresClient {}
