use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use family_wealth_backend::{
    build_router, config::Config, database::SupabaseClient, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("family_wealth_backend=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::debug!("Loaded configuration: {:?}", config);

    let client = SupabaseClient::new(&config)?;
    let state = AppState::new(Arc::new(client), config.currency.clone());
    let app = build_router(state, &config)?;

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Family Wealth OS backend running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
