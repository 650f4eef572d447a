use dotenvy::dotenv;
use std::sync::Arc;
use storefront::cart::state::spawn_idle_cart_sweeper;
use storefront::cart::AppState;
use storefront::config::AppConfig;
use storefront::router::create_app_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load environment variables
    dotenv().ok();
    let config = AppConfig::from_env();

    // Initialize application state
    let state = Arc::new(AppState::new(&config.catalog)?);
    spawn_idle_cart_sweeper(
        state.clone(),
        config.sessions.idle_ttl,
        config.sessions.sweep_interval,
    );

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Start the server
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
