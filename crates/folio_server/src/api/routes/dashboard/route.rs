use crate::api::error::{ApiError, ServerError};
use crate::api::state::AppState;
use anyhow::{Context, Result};
use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::{Datelike, Utc};
use folio_sql::sql::traits::SummarySqlLogic;
use folio_sql::PostgresClient;
use folio_types::DashboardSummary;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tracing::instrument;

#[instrument(skip_all)]
pub async fn get_dashboard_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardSummary>, ApiError> {
    let current_year = Utc::now().year();

    let summary = PostgresClient::get_dashboard_summary(&state.db_pool, current_year)
        .await
        .map_err(|e| ServerError::query("build dashboard summary", e))?;

    Ok(Json(summary))
}

pub async fn get_dashboard_router(prefix: &str) -> Result<Router<Arc<AppState>>> {
    let result = catch_unwind(AssertUnwindSafe(|| {
        Router::new().route(
            &format!("{}/dashboard/summary", prefix),
            get(get_dashboard_summary),
        )
    }));

    match result {
        Ok(router) => Ok(router),
        Err(_) => {
            // panic
            Err(anyhow::anyhow!("Failed to create dashboard router"))
                .context("Panic occurred while creating the router")
        }
    }
}
