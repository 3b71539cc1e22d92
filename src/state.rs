//! Shared application state

use crate::{approximated::ApproximatedClient, config::Config};

/// State shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub approximated: ApproximatedClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let approximated = ApproximatedClient::from_config(&config);
        Self {
            config,
            approximated,
        }
    }
}
