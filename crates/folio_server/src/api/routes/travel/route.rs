use crate::api::error::{ApiError, ServerError};
use crate::api::state::AppState;
use anyhow::{Context, Result};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::{
    routing::{get, post},
    Json, Router,
};
use folio_sql::sql::traits::CitySetSqlLogic;
use folio_sql::PostgresClient;
use folio_types::{CitySetWithPhotos, PageQuery, PageRequest, PageResult};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::instrument;

async fn page_city_sets(
    state: &AppState,
    request: &PageRequest,
) -> Result<Json<PageResult<CitySetWithPhotos>>, ApiError> {
    let page = PostgresClient::get_city_sets_page(&state.db_pool, request)
        .await
        .map_err(|e| ServerError::query("list city sets", e))?;

    Ok(Json(page))
}

#[instrument(skip_all)]
pub async fn paginate_city_sets(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PageRequest>, JsonRejection>,
) -> Result<Json<PageResult<CitySetWithPhotos>>, ApiError> {
    let Json(request) = body.map_err(ServerError::from)?;
    page_city_sets(&state, &request).await
}

#[instrument(skip_all)]
pub async fn paginate_city_sets_query(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<PageResult<CitySetWithPhotos>>, ApiError> {
    let Query(query) = query.map_err(ServerError::from)?;
    let request = query.into_request().map_err(ServerError::from)?;
    page_city_sets(&state, &request).await
}

pub async fn get_latest_city_set(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CitySetWithPhotos>, ApiError> {
    PostgresClient::get_latest_city_set(&state.db_pool)
        .await
        .map_err(|e| ServerError::query("get latest city set", e))?
        .map(Json)
        .ok_or_else(|| ServerError::NotFound("City set").into())
}

pub async fn get_city_set_by_city(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> Result<Json<CitySetWithPhotos>, ApiError> {
    PostgresClient::get_city_set_by_city(&state.db_pool, &city)
        .await
        .map_err(|e| ServerError::query("get city set", e))?
        .map(Json)
        .ok_or_else(|| ServerError::NotFound("City set").into())
}

pub async fn get_travel_router(prefix: &str) -> Result<Router<Arc<AppState>>> {
    let result = catch_unwind(AssertUnwindSafe(|| {
        Router::new()
            .route(
                &format!("{}/travel/paginated", prefix),
                post(paginate_city_sets).get(paginate_city_sets_query),
            )
            .route(
                &format!("{}/travel/latest", prefix),
                get(get_latest_city_set),
            )
            .route(
                &format!("{}/travel/city/{{city}}", prefix),
                get(get_city_set_by_city),
            )
    }));

    match result {
        Ok(router) => Ok(router),
        Err(_) => {
            // panic
            Err(anyhow::anyhow!("Failed to create travel router"))
                .context("Panic occurred while creating the router")
        }
    }
}
