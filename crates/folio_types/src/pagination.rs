//! Keyset pagination over collections ordered by `(updated_at DESC, id DESC)`.
//!
//! A page is requested with an optional [`Cursor`] naming the last record of the
//! previous page. Stores fetch `limit + 1` rows so that [`PageResult::from_overfetched`]
//! can tell whether another page exists without a separate count query.

use crate::error::TypeError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MIN_PAGE_LIMIT: i64 = 1;
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Capability shared by every paginated record: a unique, ordered id and a
/// mutable `updated_at` timestamp.
pub trait Keyed {
    fn id(&self) -> Uuid;

    fn updated_at(&self) -> DateTime<Utc>;

    fn cursor(&self) -> Cursor {
        Cursor::new(self.id(), self.updated_at())
    }
}

/// Orders two records the way pages are served: newest `updated_at` first,
/// larger `id` first among equal timestamps.
pub fn keyset_order<T: Keyed>(a: &T, b: &T) -> Ordering {
    b.updated_at()
        .cmp(&a.updated_at())
        .then_with(|| b.id().cmp(&a.id()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cursor {
    pub id: Uuid,
    pub updated_at: DateTime<Utc>,
}

impl Cursor {
    pub fn new(id: Uuid, updated_at: DateTime<Utc>) -> Self {
        Cursor { id, updated_at }
    }

    /// Parses a cursor from its textual parts.
    ///
    /// Malformed input is an error. It is never treated as "no cursor", which
    /// would silently restart pagination from the first page.
    pub fn parse(id: &str, updated_at: &str) -> Result<Self, TypeError> {
        let id = Uuid::parse_str(id.trim())
            .map_err(|e| TypeError::InvalidCursor(format!("id '{id}': {e}")))?;

        let updated_at = DateTime::parse_from_rfc3339(updated_at.trim())
            .map_err(|e| TypeError::InvalidCursor(format!("updatedAt '{updated_at}': {e}")))?
            .with_timezone(&Utc);

        Ok(Cursor { id, updated_at })
    }

    /// True when a record keyed by `(updated_at, id)` sorts strictly after this
    /// cursor, i.e. belongs on a later page.
    pub fn admits(&self, updated_at: DateTime<Utc>, id: Uuid) -> bool {
        updated_at < self.updated_at || (updated_at == self.updated_at && id < self.id)
    }

    pub fn admits_record<T: Keyed>(&self, record: &T) -> bool {
        self.admits(record.updated_at(), record.id())
    }
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(default)]
    pub cursor: Option<Cursor>,

    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            cursor: None,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Request for the page following a result, keeping the same limit.
    pub fn next_page(&self, cursor: &Cursor) -> Self {
        PageRequest {
            cursor: Some(*cursor),
            limit: self.limit,
        }
    }

    pub fn validate(&self) -> Result<(), TypeError> {
        if !(MIN_PAGE_LIMIT..=MAX_PAGE_LIMIT).contains(&self.limit) {
            return Err(TypeError::InvalidLimit {
                limit: self.limit,
                min: MIN_PAGE_LIMIT,
                max: MAX_PAGE_LIMIT,
            });
        }

        Ok(())
    }

    /// Number of rows a store should fetch: one more than the page holds.
    pub fn fetch_limit(&self) -> i64 {
        self.limit + 1
    }
}

/// Query-string form of a [`PageRequest`] for `GET` listings.
///
/// The cursor travels as two flat parameters which must be sent together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_updated_at: Option<String>,
}

impl PageQuery {
    pub fn into_request(self) -> Result<PageRequest, TypeError> {
        let cursor = match (self.cursor_id.as_deref(), self.cursor_updated_at.as_deref()) {
            (None, None) => None,
            (Some(id), Some(updated_at)) => Some(Cursor::parse(id, updated_at)?),
            _ => {
                return Err(TypeError::InvalidCursor(
                    "cursorId and cursorUpdatedAt must be sent together".to_string(),
                ))
            }
        };

        let request = PageRequest {
            cursor,
            limit: self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        };
        request.validate()?;

        Ok(request)
    }
}

impl From<&PageRequest> for PageQuery {
    fn from(request: &PageRequest) -> Self {
        PageQuery {
            limit: Some(request.limit),
            cursor_id: request.cursor.map(|c| c.id.to_string()),
            cursor_updated_at: request
                .cursor
                .map(|c| c.updated_at.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<Cursor>,
}

impl<T> PageResult<T> {
    /// Replaces the items while keeping the continuation cursor.
    pub fn with_items<U>(self, items: Vec<U>) -> PageResult<U> {
        PageResult {
            items,
            next_cursor: self.next_cursor,
        }
    }
}

impl<T: Keyed> PageResult<T> {
    /// Builds a page from rows fetched with [`PageRequest::fetch_limit`].
    ///
    /// Rows must already be in keyset order. Anything past `limit` is dropped;
    /// its presence is what signals that another page exists.
    pub fn from_overfetched(mut rows: Vec<T>, limit: i64) -> Self {
        let limit = usize::try_from(limit).unwrap_or(0);
        let has_more = rows.len() > limit;

        if has_more {
            rows.truncate(limit);
        }

        let next_cursor = if has_more {
            rows.last().map(Keyed::cursor)
        } else {
            None
        };

        PageResult {
            items: rows,
            next_cursor,
        }
    }
}

/// In-memory keyset pagination over an arbitrary collection snapshot.
///
/// Applies the same admission predicate and ordering the SQL paginator uses,
/// so it doubles as the reference for what a store must return.
pub fn paginate<T, I, F>(
    records: I,
    filter: F,
    request: &PageRequest,
) -> Result<PageResult<T>, TypeError>
where
    T: Keyed,
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> bool,
{
    request.validate()?;

    let mut eligible: Vec<T> = records
        .into_iter()
        .filter(|record| filter(record))
        .filter(|record| {
            request
                .cursor
                .as_ref()
                .map_or(true, |cursor| cursor.admits_record(record))
        })
        .collect();

    eligible.sort_by(keyset_order);

    let fetch = usize::try_from(request.fetch_limit()).unwrap_or(usize::MAX);
    eligible.truncate(fetch);

    Ok(PageResult::from_overfetched(eligible, request.limit))
}
