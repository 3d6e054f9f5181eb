use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use std::sync::Arc;

use crate::server::{
    bot::handler::Handler, config::Config, error::AppError, rules::league::League,
    service::identity::IdentityResolver,
};

/// Builds the Discord bot client.
///
/// Slash commands only need the `GUILDS` intent; interactions are delivered regardless
/// of intents.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and admin roles
/// - `db` - Database connection for the bot to use
/// - `identity` - Resolver shared with the REST facade
/// - `league` - Club and division vocabulary shared with the REST facade
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client could not be built
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    identity: Arc<dyn IdentityResolver>,
    league: Arc<League>,
) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(
        db,
        identity,
        league,
        config.discord_admin_role_ids.clone(),
    );

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// It should be called from within a tokio::spawn task since it will block until the
/// bot shuts down.
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
