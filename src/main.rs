mod model;
mod server;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::server::{bot, config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let identity = startup::build_identity_resolver(&config)?;
    let league = Arc::new(config.league.clone());

    let bot_client =
        bot::start::init_bot(&config, db.clone(), identity.clone(), league.clone()).await?;

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    let app = router::router(AppState::new(db, identity, league, config.api_key.clone()));

    let listener = tokio::net::TcpListener::bind(config.api_addr).await?;
    tracing::info!("REST API listening on {}", config.api_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
