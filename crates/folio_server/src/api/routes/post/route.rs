use crate::api::error::{ApiError, ServerError};
use crate::api::state::AppState;
use anyhow::{Context, Result};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{
    routing::{get, post},
    Json, Router,
};
use folio_sql::sql::traits::PostSqlLogic;
use folio_sql::{PostgresClient, SqlError};
use folio_types::{CreatePostRequest, PageQuery, PageRequest, PageResult, Post, UpdatePostRequest};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// A duplicate slug is the caller's problem; anything else is ours.
fn write_error(action: &'static str, slug: &str, e: SqlError) -> ServerError {
    if e.is_unique_violation() {
        ServerError::SlugConflict(slug.to_string())
    } else {
        ServerError::query(action, e)
    }
}

async fn page_posts(
    state: &AppState,
    request: &PageRequest,
) -> Result<Json<PageResult<Post>>, ApiError> {
    let page = PostgresClient::get_posts_page(&state.db_pool, request)
        .await
        .map_err(|e| ServerError::query("list posts", e))?;

    Ok(Json(page))
}

#[instrument(skip_all)]
pub async fn paginate_posts(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PageRequest>, JsonRejection>,
) -> Result<Json<PageResult<Post>>, ApiError> {
    let Json(request) = body.map_err(ServerError::from)?;
    page_posts(&state, &request).await
}

#[instrument(skip_all)]
pub async fn paginate_posts_query(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<PageResult<Post>>, ApiError> {
    let Query(query) = query.map_err(ServerError::from)?;
    let request = query.into_request().map_err(ServerError::from)?;
    page_posts(&state, &request).await
}

#[instrument(skip_all)]
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<Json<Post>, ApiError> {
    let Json(request) = body.map_err(ServerError::from)?;
    let draft = request.into_draft().map_err(ServerError::from)?;

    let post = PostgresClient::insert_post(&state.db_pool, &draft)
        .await
        .map_err(|e| write_error("create post", &draft.slug, e))?;

    info!("Post {} created with slug {}", post.id, post.slug);
    Ok(Json(post))
}

pub async fn get_post(
    State(state): State<Arc<AppState>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Post>, ApiError> {
    let Path(id) = path.map_err(ServerError::from)?;

    PostgresClient::get_post(&state.db_pool, &id)
        .await
        .map_err(|e| ServerError::query("get post", e))?
        .map(Json)
        .ok_or_else(|| ServerError::NotFound("Post").into())
}

#[instrument(skip_all)]
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> Result<Json<Post>, ApiError> {
    let Path(id) = path.map_err(ServerError::from)?;
    let Json(request) = body.map_err(ServerError::from)?;
    let draft = request.into_draft().map_err(ServerError::from)?;

    PostgresClient::update_post(&state.db_pool, &id, &draft)
        .await
        .map_err(|e| write_error("update post", &draft.slug, e))?
        .map(Json)
        .ok_or_else(|| ServerError::NotFound("Post").into())
}

#[instrument(skip_all)]
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path.map_err(ServerError::from)?;

    let deleted = PostgresClient::delete_post(&state.db_pool, &id)
        .await
        .map_err(|e| ServerError::query("delete post", e))?;

    if !deleted {
        return Err(ServerError::NotFound("Post").into());
    }

    info!("Post {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Dashboard post routes, all behind the api token.
pub async fn get_post_router(prefix: &str) -> Result<Router<Arc<AppState>>> {
    let result = catch_unwind(AssertUnwindSafe(|| {
        Router::new()
            .route(&format!("{}/posts", prefix), post(create_post))
            .route(
                &format!("{}/posts/paginated", prefix),
                post(paginate_posts).get(paginate_posts_query),
            )
            .route(
                &format!("{}/posts/{{id}}", prefix),
                get(get_post).put(update_post).delete(delete_post),
            )
    }));

    match result {
        Ok(router) => Ok(router),
        Err(_) => {
            // panic
            Err(anyhow::anyhow!("Failed to create post router"))
                .context("Panic occurred while creating the router")
        }
    }
}
