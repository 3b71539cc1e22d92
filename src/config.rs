//! Application configuration

use std::env;

/// Default base URL for the Approximated.app provisioning API
const DEFAULT_APPROXIMATED_API_BASE: &str = "https://cloud.approximated.app/api";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,

    // Serving domain
    pub primary_domain: String,

    // Approximated.app (virtual host provisioning)
    pub approximated_api_key: String,
    pub approximated_api_base: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Server
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),

            // Serving domain
            // The NEXT_PUBLIC_ name is the legacy spelling from the
            // original frontend deployment; still honored as a fallback.
            primary_domain: env::var("APP_PRIMARY_DOMAIN")
                .or_else(|_| env::var("NEXT_PUBLIC_APP_PRIMARY_DOMAIN"))
                .unwrap_or_default(),

            // Approximated.app
            // A missing key is not rejected here; the provisioning API
            // refuses unauthenticated calls itself.
            approximated_api_key: env::var("APPROXIMATED_API_KEY").unwrap_or_default(),
            approximated_api_base: {
                let base = env::var("APPROXIMATED_API_BASE")
                    .unwrap_or_else(|_| DEFAULT_APPROXIMATED_API_BASE.to_string());
                if !base.starts_with("http://") && !base.starts_with("https://") {
                    return Err(ConfigError::InvalidApiBase(
                        "APPROXIMATED_API_BASE must be an http:// or https:// URL",
                    ));
                }
                // Trailing slash would break path joins like {base}/vhosts
                base.trim_end_matches('/').to_string()
            },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid provisioning API base URL: {0}")]
    InvalidApiBase(&'static str),
}
