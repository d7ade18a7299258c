use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::error;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Alive {
    pub status: String,
}

impl Default for Alive {
    fn default() -> Self {
        Self {
            status: "Alive".to_string(),
        }
    }
}

/// Common struct for returning errors from the folio server (axum response)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FolioServerError {
    pub error: String,
}

impl FolioServerError {
    pub fn unauthorized() -> Self {
        FolioServerError {
            error: "Unauthorized".to_string(),
        }
    }

    pub fn invalid_request<T: Display>(e: T) -> Self {
        FolioServerError {
            error: format!("Invalid request: {e}"),
        }
    }

    pub fn not_found(what: &str) -> Self {
        FolioServerError {
            error: format!("{what} not found"),
        }
    }

    pub fn slug_taken(slug: &str) -> Self {
        FolioServerError {
            error: format!("Slug '{slug}' is already in use"),
        }
    }

    pub fn query_error<T: Display>(what: &str, e: T) -> Self {
        error!("Failed to {}: {}", what, e);
        FolioServerError {
            error: format!("Failed to {what}"),
        }
    }
}
