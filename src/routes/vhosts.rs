//! Virtual host registration endpoint
//!
//! Thin proxy in front of the Approximated.app vhosts API: the caller
//! submits the hostname it wants to connect, the server pairs it with
//! the configured primary domain and relays the upstream answer.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::{error::ApiResult, state::AppState};

#[derive(Debug, Deserialize)]
pub struct CreateVirtualHostRequest {
    /// Hostname the user wants to connect (e.g. "app.customer.com")
    pub incoming_address: String,
}

/// Register a custom domain as a virtual host
///
/// On success the decoded upstream body is returned verbatim with
/// status 200. Upstream rejections come back under the upstream status
/// as `{"error": <upstream body>}`; anything that prevented a usable
/// upstream answer is an opaque 500.
pub async fn create_virtual_host(
    State(state): State<AppState>,
    Json(req): Json<CreateVirtualHostRequest>,
) -> ApiResult<Json<Value>> {
    let vhost = state
        .approximated
        .create_vhost(&req.incoming_address)
        .await?;

    Ok(Json(vhost.raw))
}
