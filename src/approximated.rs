//! Approximated.app API integration for virtual host provisioning
//!
//! When a user connects a custom domain, this module registers it as a
//! "virtual host" with Approximated.app, which then routes that hostname
//! onto our primary domain at its edge.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::config::Config;

/// Fallback shown when an upstream rejection carries no usable detail
pub const UNKNOWN_ERROR_MESSAGE: &str = "Error creating virtual host";

/// Client for interacting with the Approximated.app virtual host API
#[derive(Clone)]
pub struct ApproximatedClient {
    client: Client,
    api_key: String,
    api_base: String,
    target_address: String,
}

#[derive(Debug, Serialize)]
struct CreateVhostRequest<'a> {
    incoming_address: &'a str,
    target_address: &'a str,
}

/// A successfully provisioned virtual host
///
/// The upstream response schema is not pinned down, so the full payload
/// is kept verbatim alongside the fields we read for logging.
#[derive(Debug, Clone)]
pub struct VirtualHost {
    /// Hostname that was connected
    pub incoming_address: String,
    /// Follow-up instructions from the provider (e.g. which DNS record to set)
    pub user_message: String,
    /// Complete upstream response body
    pub raw: Value,
}

impl VirtualHost {
    fn from_payload(raw: Value) -> Self {
        let incoming_address = payload_str(&raw, "incoming_address");
        let user_message = payload_str(&raw, "user_message");
        Self {
            incoming_address,
            user_message,
            raw,
        }
    }
}

/// Read a string field from the payload, looking under a `data` wrapper
/// first since some API versions nest the virtual host there
fn payload_str(payload: &Value, field: &str) -> String {
    payload
        .get("data")
        .unwrap_or(payload)
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Summarize a rejection payload for logs
///
/// Prefers the structured `errors` field when the upstream sends one,
/// then the payload as a whole, then a fixed fallback.
pub fn error_detail(payload: &Value) -> Value {
    if let Some(errors) = payload.get("errors") {
        return errors.clone();
    }
    if !payload.is_null() {
        return payload.clone();
    }
    serde_json::json!({ "unknown": UNKNOWN_ERROR_MESSAGE })
}

/// Errors from virtual host provisioning
#[derive(Debug, thiserror::Error)]
pub enum VhostError {
    #[error("Failed to call provisioning API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to parse provisioning API response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Provisioning API rejected the request with status {status}")]
    Rejected { status: StatusCode, detail: Value },
}

impl ApproximatedClient {
    /// Create a new client
    pub fn new(api_key: String, api_base: String, target_address: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_base,
            target_address,
        }
    }

    /// Create a client from the application config
    pub fn from_config(config: &Config) -> Self {
        if config.approximated_api_key.is_empty() {
            warn!("APPROXIMATED_API_KEY not set - virtual host registration will be rejected upstream");
        }

        Self::new(
            config.approximated_api_key.clone(),
            config.approximated_api_base.clone(),
            config.primary_domain.clone(),
        )
    }

    /// Register a virtual host mapping `incoming_address` onto the primary domain
    ///
    /// Makes exactly one attempt with no retry; the upstream treats
    /// re-registration of the same hostname as its own concern. The
    /// response body is decoded before the status is inspected, so a
    /// non-JSON body is a decode failure whatever the status was.
    pub async fn create_vhost(&self, incoming_address: &str) -> Result<VirtualHost, VhostError> {
        let url = format!("{}/vhosts", self.api_base);
        let request = CreateVhostRequest {
            incoming_address,
            target_address: &self.target_address,
        };

        let response = self
            .client
            .post(&url)
            .header("Api-Key", self.api_key.as_str())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(VhostError::Transport)?;

        let status = response.status();
        let payload: Value = response.json().await.map_err(VhostError::Decode)?;

        if !status.is_success() {
            error!(
                "Provisioning API rejected {} with status {}: {}",
                incoming_address,
                status,
                error_detail(&payload)
            );
            return Err(VhostError::Rejected {
                status,
                detail: payload,
            });
        }

        let vhost = VirtualHost::from_payload(payload);
        info!(
            "Registered virtual host {} -> {}",
            incoming_address, self.target_address
        );

        Ok(vhost)
    }
}
