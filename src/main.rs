use wiki_api::app::build_router;
use wiki_api::config::AppConfig;
use wiki_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wiki_api=info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!("Connecting to MongoDB at {}", config.mongodb_uri);

    let state = AppState::connect(config.clone()).await?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server is listening on http://{}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
