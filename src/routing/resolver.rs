//! Serving-domain resolution
//!
//! Decides which logical domain an incoming request is being served on.
//! Deployments sit behind the Approximated.app edge, which terminates the
//! customer's domain and forwards the original hostname in a side-channel
//! header while the standard Host header points at the backend itself.
//! Resolution order:
//! - `apx-incoming-host` header (set by the edge for custom domains)
//! - `Host` header (direct traffic)
//! - configured primary domain (no usable headers at all)

use axum::http::{header, HeaderMap};

use crate::config::Config;

/// Header the Approximated.app edge uses to carry the original hostname
pub const INCOMING_HOST_HEADER: &str = "apx-incoming-host";

/// The domain a request resolved to
///
/// Holds the raw value from the winning source. Nothing is normalized:
/// case, whitespace and any `:port` suffix are preserved exactly as
/// received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServingDomain(String);

impl ServingDomain {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this request is being served on the primary domain
    ///
    /// Exact, case-sensitive string comparison. `Demo.Example.com` and
    /// `demo.example.com:3000` both count as custom domains when the
    /// primary is `demo.example.com`; callers that want looser matching
    /// must normalize both sides before configuring them.
    pub fn is_primary(&self, config: &Config) -> bool {
        self.0 == config.primary_domain
    }
}

impl std::fmt::Display for ServingDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the serving domain for a request
///
/// First source with a non-empty value wins. Header name lookups are
/// case-insensitive (HTTP semantics); header values are taken verbatim.
pub fn resolve(headers: &HeaderMap, config: &Config) -> ServingDomain {
    let domain = usable_header(headers, INCOMING_HOST_HEADER)
        .or_else(|| usable_header(headers, header::HOST.as_str()))
        .unwrap_or(&config.primary_domain);

    ServingDomain(domain.to_string())
}

/// A header counts only when present, valid UTF-8 and non-empty
fn usable_header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}
