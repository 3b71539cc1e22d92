use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use apx_domains::{create_router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,apx_domains=debug,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    if config.primary_domain.is_empty() {
        tracing::warn!(
            "APP_PRIMARY_DOMAIN not set - every request will be treated as a custom domain"
        );
    }

    let bind_address = config.bind_address.clone();
    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Listening on {}", bind_address);

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
