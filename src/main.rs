use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;

use arqen_backend::config::AppConfig;
use arqen_backend::routes;
use arqen_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("arqen_backend=info,tower_http=info")
            }),
        )
        .init();

    let config = AppConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState::new(config)?);

    let app = routes::create_router()
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("ArqenAI backend listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
