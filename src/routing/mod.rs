//! Host-based request classification
//!
//! This module decides which domain a request is being served on,
//! covering the three ways traffic arrives:
//! - through the Approximated.app edge (original host in `apx-incoming-host`)
//! - directly against the backend (plain Host header)
//! - from contexts with no usable headers (configured primary domain)

mod middleware;
mod resolver;

pub use middleware::resolve_serving_domain;
pub use resolver::{resolve, ServingDomain, INCOMING_HOST_HEADER};
