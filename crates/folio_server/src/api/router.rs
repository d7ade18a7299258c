use crate::api::routes::auth::auth_api_middleware;
use crate::api::routes::{
    get_blog_router, get_dashboard_router, get_health_router, get_photo_router, get_post_router,
    get_protected_photo_router, get_travel_router,
};
use crate::api::state::AppState;
use anyhow::Result;
use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use axum::middleware;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub const ROUTE_PREFIX: &str = "/folio";

/// Create the main router for the application
///
/// Protected routes sit behind the api token middleware; public routes are
/// merged in afterwards. Both may share a path as long as the methods differ.
///
/// # Parameters
/// - `app_state` - The application state shared across all handlers
///
/// # Returns
///
/// The main router for the application
pub async fn create_router(app_state: Arc<AppState>) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    let health_routes = get_health_router(ROUTE_PREFIX).await?;
    let photo_routes = get_photo_router(ROUTE_PREFIX).await?;
    let blog_routes = get_blog_router(ROUTE_PREFIX).await?;
    let travel_routes = get_travel_router(ROUTE_PREFIX).await?;

    let protected_photo_routes = get_protected_photo_router(ROUTE_PREFIX).await?;
    let post_routes = get_post_router(ROUTE_PREFIX).await?;
    let dashboard_routes = get_dashboard_router(ROUTE_PREFIX).await?;

    let protected_routes = Router::new()
        .merge(protected_photo_routes)
        .merge(post_routes)
        .merge(dashboard_routes)
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_api_middleware,
        ));

    Ok(Router::new()
        .merge(protected_routes)
        .merge(health_routes)
        .merge(photo_routes)
        .merge(blog_routes)
        .merge(travel_routes)
        .layer(cors)
        .with_state(app_state))
}
