//! Middleware that resolves the serving domain once per request

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use super::resolver;
use crate::state::AppState;

/// Resolve the serving domain and attach it to the request extensions
///
/// Handlers pick the result up with `Extension<ServingDomain>`, so the
/// fallback chain lives in exactly one place.
pub async fn resolve_serving_domain(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let domain = resolver::resolve(request.headers(), &state.config);
    debug!("Resolved serving domain {} for {}", domain, request.uri().path());

    request.extensions_mut().insert(domain);
    next.run(request).await
}
