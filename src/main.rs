use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use tracing::{info, warn};

use finbot_backend::config::AppConfig;
use finbot_backend::routes::{self, cors_layer};
use finbot_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    if config.openai_api_key.is_empty() {
        warn!("OPENAI_API_KEY is not set; chat requests will fail at the completion step");
    }

    let origin: HeaderValue = config
        .allowed_origin
        .parse()
        .with_context(|| format!("invalid ALLOWED_ORIGIN '{}'", config.allowed_origin))?;

    let state = Arc::new(AppState::new(&config)?);

    let app = routes::create_router()
        .with_state(state)
        .layer(cors_layer(origin));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!("finbot backend listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
