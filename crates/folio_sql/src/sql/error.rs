use folio_types::error::TypeError;
use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlError {
    #[error(transparent)]
    SqlxError(#[from] SqlxError),

    #[error("Failed to run migrations")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    TypeError(#[from] TypeError),

    #[error("Failed to connect to database: {0}")]
    ConnectionError(String),
}

impl SqlError {
    /// True when the statement hit a unique constraint (e.g. a duplicate post slug).
    pub fn is_unique_violation(&self) -> bool {
        match self {
            SqlError::SqlxError(SqlxError::Database(e)) => e.is_unique_violation(),
            _ => false,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SqlError::TypeError(_))
    }
}
