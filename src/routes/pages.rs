//! Server-rendered demo pages
//!
//! Three variants of the same greeting: two resolved on the server from
//! request headers, one resolved in the browser for setups where the
//! page is rendered once and served without per-request headers.

use askama::Template;
use axum::{extract::State, response::Html, Extension};

use crate::{routing::ServingDomain, state::AppState};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    domain: String,
    is_primary: bool,
}

#[derive(Template)]
#[template(path = "ssr_page.html")]
struct SsrPageTemplate {
    domain: String,
    is_primary: bool,
}

#[derive(Template)]
#[template(path = "csr_page.html")]
struct CsrPageTemplate {
    primary_domain_json: String,
}

fn render<T: Template>(template: T) -> Html<String> {
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Landing page
pub async fn index(
    State(state): State<AppState>,
    Extension(domain): Extension<ServingDomain>,
) -> Html<String> {
    render(IndexTemplate {
        is_primary: domain.is_primary(&state.config),
        domain: domain.as_str().to_string(),
    })
}

/// Server-rendered page with the custom-domain wording
pub async fn ssr_page(
    State(state): State<AppState>,
    Extension(domain): Extension<ServingDomain>,
) -> Html<String> {
    render(SsrPageTemplate {
        is_primary: domain.is_primary(&state.config),
        domain: domain.as_str().to_string(),
    })
}

/// Client-side resolution page
///
/// The shipped script compares `window.location.host` (port included)
/// against the primary domain with the same exact equality the server
/// pages use.
pub async fn csr_page(State(state): State<AppState>) -> Html<String> {
    // JSON-encode so the value lands in the script as a string literal
    let primary_domain_json = serde_json::to_string(&state.config.primary_domain)
        .unwrap_or_else(|_| "\"\"".to_string());

    render(CsrPageTemplate {
        primary_domain_json,
    })
}
