use crate::error::TypeError;
use crate::pagination::Keyed;
use crate::util::{reading_time_minutes, slugify};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumString};
use uuid::Uuid;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    pub fn parse(value: &str) -> Result<Self, TypeError> {
        Visibility::from_str(value.trim())
            .map_err(|_| TypeError::InvalidVisibility(value.to_string()))
    }
}

#[cfg(feature = "server")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Visibility {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let text = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Visibility::parse(text)?)
    }
}

#[cfg(feature = "server")]
impl sqlx::Type<sqlx::Postgres> for Visibility {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

#[cfg(feature = "server")]
impl sqlx::Encode<'_, sqlx::Postgres> for Visibility {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode(self.as_ref(), buf)
    }
}

#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
    pub visibility: Visibility,
    pub reading_time_minutes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Keyed for Post {
    fn id(&self) -> Uuid {
        self.id
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
}

/// Slugs that collide with fixed blog routes.
const RESERVED_SLUGS: [&str; 2] = ["latest", "paginated"];

/// Full replacement of a post's editable fields.
pub type UpdatePostRequest = CreatePostRequest;

/// A post request after slug and reading time have been derived.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
    pub visibility: Visibility,
    pub reading_time_minutes: i32,
}

impl CreatePostRequest {
    pub fn into_draft(self) -> Result<PostDraft, TypeError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(TypeError::EmptyTitle);
        }

        let source = self
            .slug
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&title);

        let slug = slugify(source);
        if slug.is_empty() || RESERVED_SLUGS.contains(&slug.as_str()) {
            return Err(TypeError::InvalidSlug(source.to_string()));
        }

        let tags = self
            .tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(PostDraft {
            reading_time_minutes: reading_time_minutes(&self.content),
            title,
            slug,
            description: self.description,
            cover_image: self.cover_image,
            content: self.content,
            tags,
            visibility: self.visibility,
        })
    }
}
