//! `/fantasyadmin` commands: gameweek lifecycle, stat entry, prices and budgets.

use rust_decimal::Decimal;
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use crate::server::{
    bot::{
        command::{
            option::CommandInput, parse_amount, player_label, player_option, position_option,
            unknown_command, CommandContext, CommandReply,
        },
        render,
    },
    error::AppError,
    model::{fantasy::FantasyPosition, gameweek::StatLine},
    rules::fantasy::STARTING_BUDGET,
    service::fantasy::{gameweek::GameweekService, roster::FantasyRosterService},
};

fn subcommand(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

fn count_option(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, name, description).min_int_value(0)
}

fn flag_option(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Boolean, name, description)
}

pub fn definition() -> CreateCommand {
    CreateCommand::new("fantasyadmin")
        .description("Run the fantasy league")
        .add_option(
            subcommand("newweek", "Start a new gameweek, ending the current one")
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::Integer, "number", "Gameweek number")
                        .required(true)
                        .min_int_value(1),
                )
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::String, "season", "Season label")
                        .required(true),
                ),
        )
        .add_option(subcommand("endweek", "End the active gameweek"))
        .add_option(
            subcommand("addstats", "Record a player's match stats")
                .add_sub_option(player_option("player"))
                .add_sub_option(position_option())
                .add_sub_option(count_option("goals", "Goals scored"))
                .add_sub_option(count_option("assists", "Assists"))
                .add_sub_option(flag_option("cleansheet", "Kept a clean sheet"))
                .add_sub_option(count_option("saves", "Saves (goalkeepers only)"))
                .add_sub_option(flag_option("motm", "Man of the match"))
                .add_sub_option(flag_option("yellowcard", "Received a yellow card"))
                .add_sub_option(flag_option("redcard", "Received a red card")),
        )
        .add_option(subcommand(
            "calculate",
            "Add the active gameweek's points to every team",
        ))
        .add_option(
            subcommand("setprice", "Set a player's fantasy price")
                .add_sub_option(player_option("player"))
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "price",
                        "Price in millions, e.g. 7.5",
                    )
                    .required(true),
                ),
        )
        .add_option(
            subcommand("resetbudget", "Overwrite a fantasy team's budget")
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::User, "user", "Team owner")
                        .required(true),
                )
                .add_sub_option(CreateCommandOption::new(
                    CommandOptionType::String,
                    "amount",
                    "Budget in millions, defaults to the starting budget",
                )),
        )
}

fn stat_line(input: &CommandInput) -> Result<StatLine, AppError> {
    let position: FantasyPosition = input.string("position")?.parse()?;
    let flag = |name: &str| input.optional_boolean(name).map(Option::unwrap_or_default);

    Ok(StatLine {
        position,
        goals: input.count("goals")?,
        assists: input.count("assists")?,
        clean_sheet: flag("cleansheet")?,
        saves: input.count("saves")?,
        motm: flag("motm")?,
        yellow_card: flag("yellowcard")?,
        red_card: flag("redcard")?,
    })
}

pub async fn run(ctx: &CommandContext<'_>, input: &CommandInput) -> Result<CommandReply, AppError> {
    let gameweeks = GameweekService::new(ctx.db);
    let roster = FantasyRosterService::new(ctx.db);

    match input.subcommand()? {
        "newweek" => {
            let number = i32::try_from(input.integer("number")?)
                .map_err(|_| AppError::BadRequest("Gameweek number is too large".to_string()))?;
            let gameweek = gameweeks.new_week(number, input.string("season")?).await?;

            Ok(CommandReply::Text(format!(
                "Started gameweek {} ({})",
                gameweek.number, gameweek.season
            )))
        }
        "endweek" => {
            let gameweek = gameweeks.end_week().await?;

            Ok(CommandReply::Text(format!(
                "Ended gameweek {} ({})",
                gameweek.number, gameweek.season
            )))
        }
        "addstats" => {
            let line = stat_line(input)?;
            let stat = gameweeks
                .add_stats(input.string("player")?, line, ctx.identity)
                .await?;

            Ok(CommandReply::Text(format!(
                "Recorded stats for {}: {} points",
                player_label(ctx.db, stat.player_id).await,
                stat.points
            )))
        }
        "calculate" => {
            let summary = gameweeks.calculate().await?;

            Ok(CommandReply::Text(render::calculate_line(&summary)))
        }
        "setprice" => {
            let player_id = ctx
                .identity
                .resolve_identity(input.string("player")?)
                .await?;
            let price = parse_amount(input.string("price")?)?;
            let player = roster.set_price(player_id, price).await?;

            Ok(CommandReply::Text(format!(
                "Set {}'s price to {}",
                player.name_or_id(),
                render::millions(player.fantasy_price)
            )))
        }
        "resetbudget" => {
            let owner_id = input.user("user")?;
            let amount: Decimal = match input.string("amount") {
                Ok(amount) => parse_amount(amount)?,
                Err(_) => STARTING_BUDGET,
            };
            let team = roster.reset_budget(owner_id, amount).await?;

            Ok(CommandReply::Text(format!(
                "Reset **{}**'s budget to {}",
                team.team_name,
                render::millions(team.budget)
            )))
        }
        other => Err(unknown_command(other)),
    }
}
