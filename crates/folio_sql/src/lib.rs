pub mod sql;

pub use sql::error::SqlError;
pub use sql::pagination::{fetch_page, Filter, KeysetCollection};
pub use sql::postgres::PostgresClient;
