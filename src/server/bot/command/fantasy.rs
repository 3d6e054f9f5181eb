//! `/fantasy` member commands. The acting Discord user owns the team.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use crate::server::{
    bot::{
        command::{
            option::CommandInput, player_label, player_option, position_option, unknown_command,
            CommandContext, CommandReply,
        },
        render,
    },
    error::AppError,
    model::fantasy::FantasyPosition,
    service::fantasy::{gameweek::GameweekService, roster::FantasyRosterService},
};

const LEADERBOARD_SIZE: u64 = 10;

fn subcommand(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

pub fn definition() -> CreateCommand {
    CreateCommand::new("fantasy")
        .description("Play the fantasy league")
        .add_option(
            subcommand("register", "Register a fantasy team").add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "name", "Team name")
                    .required(true)
                    .max_length(32),
            ),
        )
        .add_option(
            subcommand("pick", "Pick a player into your squad")
                .add_sub_option(player_option("player"))
                .add_sub_option(position_option()),
        )
        .add_option(
            subcommand("drop", "Drop a player from your squad")
                .add_sub_option(player_option("player")),
        )
        .add_option(
            subcommand("captain", "Make a squad player your captain")
                .add_sub_option(player_option("player")),
        )
        .add_option(subcommand("team", "Show your fantasy team"))
        .add_option(subcommand("leaderboard", "Show the top fantasy teams"))
        .add_option(subcommand("gameweek", "Show the active gameweek"))
}

pub async fn run(ctx: &CommandContext<'_>, input: &CommandInput) -> Result<CommandReply, AppError> {
    let roster = FantasyRosterService::new(ctx.db);

    match input.subcommand()? {
        "register" => {
            let team = roster.register(ctx.actor_id, input.string("name")?).await?;

            Ok(CommandReply::Text(format!(
                "Registered **{}** with a budget of {}",
                team.team_name,
                render::millions(team.budget)
            )))
        }
        "pick" => {
            let player_id = ctx
                .identity
                .resolve_identity(input.string("player")?)
                .await?;
            let position: FantasyPosition = input.string("position")?.parse()?;

            let outcome = roster.pick(ctx.actor_id, player_id, position).await?;

            Ok(CommandReply::Text(format!(
                "Picked {} as {} for {}. Remaining budget: {}",
                player_label(ctx.db, player_id).await,
                position.label(),
                render::millions(outcome.price),
                render::millions(outcome.team.budget)
            )))
        }
        "drop" => {
            let player_id = ctx
                .identity
                .resolve_identity(input.string("player")?)
                .await?;

            let outcome = roster.drop_player(ctx.actor_id, player_id).await?;

            Ok(CommandReply::Text(format!(
                "Dropped {} for a refund of {}. Remaining budget: {}",
                player_label(ctx.db, player_id).await,
                render::millions(outcome.refund),
                render::millions(outcome.team.budget)
            )))
        }
        "captain" => {
            let player_id = ctx
                .identity
                .resolve_identity(input.string("player")?)
                .await?;

            roster.set_captain(ctx.actor_id, player_id).await?;

            Ok(CommandReply::Text(format!(
                "{} is now your captain",
                player_label(ctx.db, player_id).await
            )))
        }
        "team" => {
            let squad = roster.squad(ctx.actor_id).await?;

            Ok(CommandReply::Embed(render::squad_embed(&squad)))
        }
        "leaderboard" => {
            let entries = roster.leaderboard(LEADERBOARD_SIZE).await?;

            Ok(CommandReply::Embed(render::leaderboard_embed(&entries)))
        }
        "gameweek" => {
            let gameweek = GameweekService::new(ctx.db).active_gameweek().await?;

            Ok(CommandReply::Text(render::gameweek_line(&gameweek)))
        }
        other => Err(unknown_command(other)),
    }
}
