use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::server::{rules::league::League, service::identity::IdentityResolver};

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub identity: Arc<dyn IdentityResolver>,
    pub league: Arc<League>,
    /// Roles whose members may run admin commands.
    pub admin_role_ids: Vec<u64>,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        identity: Arc<dyn IdentityResolver>,
        league: Arc<League>,
        admin_role_ids: Vec<u64>,
    ) -> Self {
        Self {
            db,
            identity,
            league,
            admin_role_ids,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, &self.league).await;
    }

    /// Called for every interaction; only slash commands are handled
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            interaction::handle_command(self, ctx, command).await;
        }
    }
}
