//! SQL side of keyset pagination.
//!
//! Every paginated collection goes through [`fetch_page`]: the caller names the
//! table through [`KeysetCollection`] and narrows it with a [`Filter`]; the
//! cursor predicate, ordering and over-fetch are always the same.

use crate::sql::error::SqlError;
use folio_types::{CitySet, Keyed, PageRequest, PageResult, Photo, Post};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Pool, Postgres, QueryBuilder};
use tracing::debug;

/// A table served in `(updated_at DESC, id DESC)` pages.
pub trait KeysetCollection: Keyed + for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const TABLE: &'static str;
}

impl KeysetCollection for Photo {
    const TABLE: &'static str = "folio.photo";
}

impl KeysetCollection for Post {
    const TABLE: &'static str = "folio.post";
}

impl KeysetCollection for CitySet {
    const TABLE: &'static str = "folio.city_set";
}

/// Equality predicates AND-ed onto a page query.
///
/// Column names are `&'static str` so they can only come from code; values are
/// always bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<(&'static str, String)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq_text(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.clauses.push((column, value.into()));
        self
    }
}

/// Builds the page query for `T`. The request is assumed to be validated.
pub fn build_page_query<T: KeysetCollection>(
    filter: &Filter,
    request: &PageRequest,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT * FROM {}", T::TABLE));
    let mut separator = " WHERE ";

    for (column, value) in &filter.clauses {
        builder
            .push(separator)
            .push(*column)
            .push(" = ")
            .push_bind(value.clone());
        separator = " AND ";
    }

    if let Some(cursor) = request.cursor {
        builder
            .push(separator)
            .push("(updated_at < ")
            .push_bind(cursor.updated_at)
            .push(" OR (updated_at = ")
            .push_bind(cursor.updated_at)
            .push(" AND id < ")
            .push_bind(cursor.id)
            .push("))");
    }

    builder
        .push(" ORDER BY updated_at DESC, id DESC LIMIT ")
        .push_bind(request.fetch_limit());

    builder
}

/// Fetches one page of `T`.
///
/// Rejects an out-of-range limit before touching the database. One extra row
/// is fetched to decide whether a `next_cursor` is returned.
pub async fn fetch_page<T: KeysetCollection>(
    pool: &Pool<Postgres>,
    filter: &Filter,
    request: &PageRequest,
) -> Result<PageResult<T>, SqlError> {
    request.validate()?;

    let mut builder = build_page_query::<T>(filter, request);
    let rows: Vec<T> = builder.build_query_as::<T>().fetch_all(pool).await?;

    debug!(
        table = T::TABLE,
        fetched = rows.len(),
        limit = request.limit,
        "Fetched keyset page"
    );

    Ok(PageResult::from_overfetched(rows, request.limit))
}
