//! Slash command definitions and dispatch.
//!
//! Every command is handled in three steps: options are copied into a `CommandInput`,
//! the matching handler calls the services, and the result comes back as a
//! `CommandReply` for the interaction handler to send. Handlers never talk to Discord
//! themselves, so they run unchanged against a test database.

pub mod fantasy;
pub mod fantasy_admin;
pub mod option;
pub mod player;

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use serenity::all::{CreateCommand, CreateCommandOption, CreateEmbed, CommandOptionType};
use std::str::FromStr;

use crate::server::{
    bot::command::option::CommandInput,
    data::player::PlayerRepository,
    error::{fantasy::FantasyError, AppError},
    model::fantasy::FantasyPosition,
    rules::league::League,
    service::identity::IdentityResolver,
};

/// What a command handler needs from the invoking interaction.
pub struct CommandContext<'a> {
    pub db: &'a DatabaseConnection,
    pub identity: &'a dyn IdentityResolver,
    pub league: &'a League,
    /// Discord user id of the member running the command.
    pub actor_id: u64,
}

/// Successful command result.
#[derive(Debug)]
pub enum CommandReply {
    Text(String),
    Embed(CreateEmbed),
}

/// Every command registered with Discord.
pub fn definitions(league: &League) -> Vec<CreateCommand> {
    let mut commands = player::definitions(league);
    commands.push(fantasy::definition());
    commands.push(fantasy_admin::definition());
    commands
}

/// Runs a command by name.
///
/// # Returns
/// - `Ok(CommandReply)` - Text or embed to send back
/// - `Err(AppError)` - Failure to render as an ephemeral message
pub async fn dispatch(
    ctx: &CommandContext<'_>,
    name: &str,
    input: &CommandInput,
) -> Result<CommandReply, AppError> {
    match name {
        "fantasy" => fantasy::run(ctx, input).await,
        "fantasyadmin" => fantasy_admin::run(ctx, input).await,
        _ => player::run(ctx, name, input).await,
    }
}

fn unknown_command(name: &str) -> AppError {
    AppError::BadRequest(format!("Unknown command '{}'", name))
}

/// Option taking a Roblox id or username.
fn player_option(name: &str) -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::String,
        name,
        "Roblox UserId or username",
    )
    .required(true)
}

fn position_option() -> CreateCommandOption {
    FantasyPosition::ALL.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "position", "Squad position")
            .required(true),
        |option, position| option.add_string_choice(position.label(), position.code()),
    )
}

/// Parses an amount in millions such as `7.5`.
fn parse_amount(input: &str) -> Result<Decimal, AppError> {
    Decimal::from_str(input.trim())
        .map_err(|_| FantasyError::InvalidAmount(input.to_string()).into())
}

/// Name of a league player for replies, falling back to the id.
async fn player_label(db: &DatabaseConnection, player_id: u64) -> String {
    match PlayerRepository::new(db).find_by_id(player_id).await {
        Ok(Some(player)) => player.name_or_id(),
        _ => player_id.to_string(),
    }
}
