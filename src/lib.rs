//! apx-domains library
//!
//! This crate contains the components for the multi-tenant custom domain
//! demo: serving-domain resolution behind the Approximated.app edge and
//! virtual host provisioning against its API.

pub mod approximated;
pub mod config;
pub mod error;
pub mod routes;
pub mod routing;
pub mod state;

pub use approximated::{ApproximatedClient, VhostError, VirtualHost};
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use routing::{resolve, ServingDomain, INCOMING_HOST_HEADER};
pub use state::AppState;
