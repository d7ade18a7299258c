use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TypeError {
    #[error("Page limit must be between {min} and {max}, got {limit}")]
    InvalidLimit { limit: i64, min: i64, max: i64 },

    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    #[error("Failed to derive a slug from '{0}'")]
    InvalidSlug(String),

    #[error("Invalid visibility: {0}")]
    InvalidVisibility(String),

    #[error("Title must not be empty")]
    EmptyTitle,

    #[error("Invalid photo: {0}")]
    InvalidPhoto(String),
}
