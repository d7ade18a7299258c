use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::Json;
use folio_sql::SqlError;
use folio_types::{FolioServerError, TypeError};
use thiserror::Error;

/// Error half of every handler's return type.
pub type ApiError = (StatusCode, Json<FolioServerError>);

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to {action}")]
    Query {
        action: &'static str,
        #[source]
        source: SqlError,
    },

    #[error(transparent)]
    TypeError(#[from] TypeError),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Slug '{0}' is already in use")]
    SlugConflict(String),
}

impl ServerError {
    pub fn query(action: &'static str, source: SqlError) -> Self {
        ServerError::Query { action, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Query { source, .. } if source.is_validation() => StatusCode::BAD_REQUEST,
            ServerError::Query { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::TypeError(_) | ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::SlugConflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}

impl From<ServerError> for (StatusCode, Json<FolioServerError>) {
    fn from(err: ServerError) -> Self {
        let status = err.status();

        let body = match err {
            ServerError::Query {
                source: SqlError::TypeError(e),
                ..
            } => FolioServerError::invalid_request(e),
            // store failures are logged in full and returned sanitised
            ServerError::Query { action, source } => FolioServerError::query_error(action, source),
            ServerError::TypeError(e) => FolioServerError::invalid_request(e),
            ServerError::InvalidRequest(msg) => FolioServerError::invalid_request(msg),
            ServerError::NotFound(what) => FolioServerError::not_found(what),
            ServerError::SlugConflict(slug) => FolioServerError::slug_taken(&slug),
        };

        (status, Json(body))
    }
}
