use crate::api::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use folio_types::FolioServerError;
use std::sync::Arc;
use tracing::debug;

/// Compares without short-circuiting on the first differing byte.
fn token_matches(provided: &str, expected: &str) -> bool {
    provided.len() == expected.len()
        && provided
            .bytes()
            .zip(expected.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
}

/// Gate for mutating and dashboard routes: `Authorization: Bearer <FOLIO_API_TOKEN>`.
pub async fn auth_api_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<FolioServerError>)> {
    let authorized = bearer_token(&request)
        .is_some_and(|token| token_matches(token, &state.config.auth_settings.api_token));

    if !authorized {
        debug!(path = %request.uri().path(), "Rejected request without a valid api token");
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(FolioServerError::unauthorized()),
        ));
    }

    Ok(next.run(request).await)
}
