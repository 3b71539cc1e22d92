//! HTTP routes

pub mod health;
pub mod hosts;
pub mod pages;
pub mod vhosts;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{routing::resolve_serving_domain, state::AppState};

/// Create all application routes
pub fn create_router(state: AppState) -> Router {
    // Health check routes (at root level for infrastructure monitoring).
    // Probes address the backend directly, not a tenant domain, so they
    // stay outside the serving-domain middleware.
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness));

    // Demo pages
    let page_routes = Router::new()
        .route("/", get(pages::index))
        .route("/ssr-page", get(pages::ssr_page))
        .route("/csr-page", get(pages::csr_page));

    // API routes
    // Both host paths answer from the same handler; /app-hosts is the
    // spelling the earlier deployment exposed.
    let api_routes = Router::new()
        .route("/api/host", get(hosts::host))
        .route("/app-hosts", get(hosts::host))
        .route("/api/createVirtualHost", post(vhosts::create_virtual_host));

    // Combine all routes
    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            resolve_serving_domain,
        ))
        .merge(health_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
