use crate::api::error::{ApiError, ServerError};
use crate::api::state::AppState;
use anyhow::{Context, Result};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::{
    routing::{get, post},
    Json, Router,
};
use folio_sql::sql::traits::PostSqlLogic;
use folio_sql::PostgresClient;
use folio_types::{PageQuery, PageRequest, PageResult, Post};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::instrument;

async fn page_blog(
    state: &AppState,
    request: &PageRequest,
) -> Result<Json<PageResult<Post>>, ApiError> {
    let page = PostgresClient::get_blog_page(&state.db_pool, request)
        .await
        .map_err(|e| ServerError::query("list blog posts", e))?;

    Ok(Json(page))
}

#[instrument(skip_all)]
pub async fn paginate_blog(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PageRequest>, JsonRejection>,
) -> Result<Json<PageResult<Post>>, ApiError> {
    let Json(request) = body.map_err(ServerError::from)?;
    page_blog(&state, &request).await
}

#[instrument(skip_all)]
pub async fn paginate_blog_query(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<PageResult<Post>>, ApiError> {
    let Query(query) = query.map_err(ServerError::from)?;
    let request = query.into_request().map_err(ServerError::from)?;
    page_blog(&state, &request).await
}

pub async fn get_latest_post(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Post>, ApiError> {
    PostgresClient::get_latest_public_post(&state.db_pool)
        .await
        .map_err(|e| ServerError::query("get latest post", e))?
        .map(Json)
        .ok_or_else(|| ServerError::NotFound("Post").into())
}

/// Private posts answer 404 exactly like missing ones.
pub async fn get_post_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Post>, ApiError> {
    PostgresClient::get_public_post_by_slug(&state.db_pool, &slug)
        .await
        .map_err(|e| ServerError::query("get post", e))?
        .map(Json)
        .ok_or_else(|| ServerError::NotFound("Post").into())
}

pub async fn get_blog_router(prefix: &str) -> Result<Router<Arc<AppState>>> {
    let result = catch_unwind(AssertUnwindSafe(|| {
        Router::new()
            .route(
                &format!("{}/blog/paginated", prefix),
                post(paginate_blog).get(paginate_blog_query),
            )
            .route(&format!("{}/blog/latest", prefix), get(get_latest_post))
            .route(&format!("{}/blog/{{slug}}", prefix), get(get_post_by_slug))
    }));

    match result {
        Ok(router) => Ok(router),
        Err(_) => {
            // panic
            Err(anyhow::anyhow!("Failed to create blog router"))
                .context("Panic occurred while creating the router")
        }
    }
}
