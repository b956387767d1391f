//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared `AdvertService`.

use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{BoxError, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::config::ServerConfig;
use crate::error::HttpError;
use crate::handlers;
use crate::state::AppState;

/// Build the advert routes.
///
/// Returns a router typed as `Router<AppState>` WITHOUT `.with_state()`
/// applied. Unsupported methods on a known path are answered with a JSON 405.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/adverts",
            get(handlers::adverts::list)
                .post(handlers::adverts::create)
                .fallback(handlers::adverts::collection_method_not_allowed),
        )
        .route(
            "/adverts/{id}",
            get(handlers::adverts::get)
                .put(handlers::adverts::update)
                .delete(handlers::adverts::remove)
                .fallback(handlers::adverts::item_method_not_allowed),
        )
}

/// Create the main Axum router with all routes and middleware.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, config: &ServerConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes())
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(middleware_error))
                .layer(TimeoutLayer::new(config.request_timeout())),
        )
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}

/// Any path no route matches.
async fn not_found() -> HttpError {
    HttpError::route_not_found()
}

/// Render errors raised by the tower middleware stack as JSON.
async fn middleware_error(err: BoxError) -> HttpError {
    if err.is::<Elapsed>() {
        HttpError::RequestTimeout
    } else {
        HttpError::Internal(format!("unhandled middleware error: {err}"))
    }
}
