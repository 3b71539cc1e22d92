//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::approximated::{VhostError, UNKNOWN_ERROR_MESSAGE};

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    // Upstream provisioning errors
    #[error("Provisioning API rejected the request with status {status}")]
    UpstreamRejected { status: u16, detail: Value },
    #[error("Virtual host provisioning failed")]
    VhostProvisioning,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // Relay the upstream's own status and body; when the body
            // decoded to JSON null, a literal message stands in for it
            ApiError::UpstreamRejected { status, detail } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                if detail.is_null() {
                    json!({ "error": UNKNOWN_ERROR_MESSAGE })
                } else {
                    json!({ "error": detail })
                },
            ),
            // Transport and decode failures stay opaque to the caller
            ApiError::VhostProvisioning => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to create virtual host due to an unexpected error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<VhostError> for ApiError {
    fn from(err: VhostError) -> Self {
        match err {
            VhostError::Rejected { status, detail } => ApiError::UpstreamRejected {
                status: status.as_u16(),
                detail,
            },
            VhostError::Transport(e) => {
                tracing::error!("Provisioning request failed: {}", e);
                ApiError::VhostProvisioning
            }
            VhostError::Decode(e) => {
                tracing::error!("Provisioning response was not valid JSON: {}", e);
                ApiError::VhostProvisioning
            }
        }
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
