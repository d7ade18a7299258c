pub mod error;
pub mod pagination;
pub mod postgres;
pub mod query;
pub mod traits;
