use crate::api::error::{ApiError, ServerError};
use crate::api::state::AppState;
use anyhow::{Context, Result};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::{
    routing::{get, patch, post},
    Json, Router,
};
use folio_sql::sql::traits::PhotoSqlLogic;
use folio_sql::PostgresClient;
use folio_types::{
    CreatePhotoRequest, MapPhoto, PageQuery, PageRequest, PageResult, Photo, UpdatePhotoRequest,
};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

async fn page_photos(
    state: &AppState,
    request: &PageRequest,
) -> Result<Json<PageResult<Photo>>, ApiError> {
    let page = PostgresClient::get_photos_page(&state.db_pool, request)
        .await
        .map_err(|e| ServerError::query("list photos", e))?;

    Ok(Json(page))
}

#[instrument(skip_all)]
pub async fn paginate_photos(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PageRequest>, JsonRejection>,
) -> Result<Json<PageResult<Photo>>, ApiError> {
    let Json(request) = body.map_err(ServerError::from)?;
    page_photos(&state, &request).await
}

#[instrument(skip_all)]
pub async fn paginate_photos_query(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<PageResult<Photo>>, ApiError> {
    let Query(query) = query.map_err(ServerError::from)?;
    let request = query.into_request().map_err(ServerError::from)?;
    page_photos(&state, &request).await
}

/// Unpaginated listing by capture date, capped by `FOLIO_MAX_UNPAGINATED_ROWS`.
#[instrument(skip_all)]
pub async fn get_all_photos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Photo>>, ApiError> {
    let photos =
        PostgresClient::get_all_photos(&state.db_pool, state.config.max_unpaginated_rows)
            .await
            .map_err(|e| ServerError::query("list photos", e))?;

    Ok(Json(photos))
}

#[instrument(skip_all)]
pub async fn create_photo(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreatePhotoRequest>, JsonRejection>,
) -> Result<Json<Photo>, ApiError> {
    let Json(request) = body.map_err(ServerError::from)?;
    request.validate().map_err(ServerError::from)?;

    let photo = PostgresClient::insert_photo(&state.db_pool, &request)
        .await
        .map_err(|e| ServerError::query("create photo", e))?;

    info!("Photo {} created", photo.id);
    Ok(Json(photo))
}

pub async fn get_photo(
    State(state): State<Arc<AppState>>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Photo>, ApiError> {
    let Path(id) = path.map_err(ServerError::from)?;

    PostgresClient::get_photo(&state.db_pool, &id)
        .await
        .map_err(|e| ServerError::query("get photo", e))?
        .map(Json)
        .ok_or_else(|| ServerError::NotFound("Photo").into())
}

#[instrument(skip_all)]
pub async fn update_photo(
    State(state): State<Arc<AppState>>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdatePhotoRequest>, JsonRejection>,
) -> Result<Json<Photo>, ApiError> {
    let Path(id) = path.map_err(ServerError::from)?;
    let Json(request) = body.map_err(ServerError::from)?;

    if request.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(ServerError::from(folio_types::TypeError::EmptyTitle).into());
    }

    PostgresClient::update_photo(&state.db_pool, &id, &request)
        .await
        .map_err(|e| ServerError::query("update photo", e))?
        .map(Json)
        .ok_or_else(|| ServerError::NotFound("Photo").into())
}

pub async fn get_map_photos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MapPhoto>>, ApiError> {
    let markers = PostgresClient::get_map_photos(&state.db_pool)
        .await
        .map_err(|e| ServerError::query("list map photos", e))?;

    Ok(Json(markers))
}

/// Public photo routes.
pub async fn get_photo_router(prefix: &str) -> Result<Router<Arc<AppState>>> {
    let result = catch_unwind(AssertUnwindSafe(|| {
        Router::new()
            .route(&format!("{}/photos/{{id}}", prefix), get(get_photo))
            .route(&format!("{}/map/photos", prefix), get(get_map_photos))
    }));

    match result {
        Ok(router) => Ok(router),
        Err(_) => {
            // panic
            Err(anyhow::anyhow!("Failed to create photo router"))
                .context("Panic occurred while creating the router")
        }
    }
}

/// Photo routes behind the api token.
pub async fn get_protected_photo_router(prefix: &str) -> Result<Router<Arc<AppState>>> {
    let result = catch_unwind(AssertUnwindSafe(|| {
        Router::new()
            .route(
                &format!("{}/photos", prefix),
                get(get_all_photos).post(create_photo),
            )
            .route(
                &format!("{}/photos/paginated", prefix),
                post(paginate_photos).get(paginate_photos_query),
            )
            .route(&format!("{}/photos/{{id}}", prefix), patch(update_photo))
    }));

    match result {
        Ok(router) => Ok(router),
        Err(_) => {
            // panic
            Err(anyhow::anyhow!("Failed to create protected photo router"))
                .context("Panic occurred while creating the router")
        }
    }
}
