//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway. The slash commands are (re)registered globally here
//! so a deploy never runs with stale command definitions.

use serenity::all::{Command, Context, Ready};

use crate::server::{bot::command, rules::league::League};

/// Handles the ready event when the bot connects to Discord.
///
/// Registration failures are logged; the bot keeps running with whatever commands
/// Discord already knows.
///
/// # Arguments
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
/// - `league` - Vocabulary for the team and division choices
pub async fn handle_ready(ctx: Context, ready: Ready, league: &League) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::definitions(league)).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }
}
