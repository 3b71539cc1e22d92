//! Serving-domain echo endpoints

use axum::{Extension, Json};
use serde::Serialize;

use crate::routing::ServingDomain;

#[derive(Debug, Serialize)]
pub struct HostMessage {
    pub message: String,
}

/// Report which domain served this request
///
/// Mounted at both `/api/host` and `/app-hosts`; the two paths are kept
/// for clients of the earlier deployment that used either one.
pub async fn host(Extension(domain): Extension<ServingDomain>) -> Json<HostMessage> {
    Json(HostMessage {
        message: format!("Hello from {}", domain),
    })
}
