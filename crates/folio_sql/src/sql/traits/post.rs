use crate::sql::error::SqlError;
use crate::sql::pagination::{fetch_page, Filter};
use crate::sql::query::Queries;

use async_trait::async_trait;
use folio_types::{PageRequest, PageResult, Post, PostDraft, Visibility};
use sqlx::{Pool, Postgres};
use std::result::Result::Ok;
use uuid::Uuid;

#[async_trait]
pub trait PostSqlLogic {
    /// Dashboard listing: posts of every visibility.
    async fn get_posts_page(
        pool: &Pool<Postgres>,
        request: &PageRequest,
    ) -> Result<PageResult<Post>, SqlError> {
        fetch_page::<Post>(pool, &Filter::new(), request).await
    }

    /// Public blog listing.
    async fn get_blog_page(
        pool: &Pool<Postgres>,
        request: &PageRequest,
    ) -> Result<PageResult<Post>, SqlError> {
        let filter = Filter::new().eq_text("visibility", Visibility::Public.as_ref());
        fetch_page::<Post>(pool, &filter, request).await
    }

    /// Inserts a post.
    ///
    /// # Errors
    /// A duplicate slug surfaces as a unique violation, see [`SqlError::is_unique_violation`].
    async fn insert_post(pool: &Pool<Postgres>, draft: &PostDraft) -> Result<Post, SqlError> {
        let query = Queries::InsertPost.get_query();

        let post: Post = sqlx::query_as(&query.sql)
            .bind(Uuid::now_v7())
            .bind(&draft.title)
            .bind(&draft.slug)
            .bind(&draft.description)
            .bind(&draft.cover_image)
            .bind(&draft.content)
            .bind(&draft.tags)
            .bind(draft.visibility)
            .bind(draft.reading_time_minutes)
            .fetch_one(pool)
            .await?;

        Ok(post)
    }

    async fn get_post(pool: &Pool<Postgres>, id: &Uuid) -> Result<Option<Post>, SqlError> {
        let query = Queries::GetPost.get_query();

        let post: Option<Post> = sqlx::query_as(&query.sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(post)
    }

    async fn update_post(
        pool: &Pool<Postgres>,
        id: &Uuid,
        draft: &PostDraft,
    ) -> Result<Option<Post>, SqlError> {
        let query = Queries::UpdatePost.get_query();

        let post: Option<Post> = sqlx::query_as(&query.sql)
            .bind(id)
            .bind(&draft.title)
            .bind(&draft.slug)
            .bind(&draft.description)
            .bind(&draft.cover_image)
            .bind(&draft.content)
            .bind(&draft.tags)
            .bind(draft.visibility)
            .bind(draft.reading_time_minutes)
            .fetch_optional(pool)
            .await?;

        Ok(post)
    }

    /// Returns whether a post was deleted.
    async fn delete_post(pool: &Pool<Postgres>, id: &Uuid) -> Result<bool, SqlError> {
        let query = Queries::DeletePost.get_query();

        let result = sqlx::query(&query.sql).bind(id).execute(pool).await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_latest_public_post(pool: &Pool<Postgres>) -> Result<Option<Post>, SqlError> {
        let query = Queries::GetLatestPublicPost.get_query();

        let post: Option<Post> = sqlx::query_as(&query.sql).fetch_optional(pool).await?;

        Ok(post)
    }

    async fn get_public_post_by_slug(
        pool: &Pool<Postgres>,
        slug: &str,
    ) -> Result<Option<Post>, SqlError> {
        let query = Queries::GetPublicPostBySlug.get_query();

        let post: Option<Post> = sqlx::query_as(&query.sql)
            .bind(slug)
            .fetch_optional(pool)
            .await?;

        Ok(post)
    }
}
