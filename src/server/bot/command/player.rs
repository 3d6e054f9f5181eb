//! Roster slash commands.
//!
//! `/lookup` is open to everyone; the remaining commands are admin only and each change
//! one field of a player record.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

use crate::server::{
    bot::{
        command::{option::CommandInput, player_option, unknown_command, CommandContext, CommandReply},
        render,
    },
    error::AppError,
    model::player::{HallOfFame, ManagementRole, Player},
    rules::league::{League, FREE_AGENT},
    service::player::PlayerService,
};

fn userid_option() -> CreateCommandOption {
    player_option("userid")
}

/// Discord rejects options with more choices than this.
const MAX_CHOICES: usize = 25;

/// String option offering `choices`, or free text when there are none or too many.
///
/// Free text is still validated by the roster service.
fn choice_option<'c>(
    name: &str,
    description: &str,
    choices: impl ExactSizeIterator<Item = &'c str>,
) -> CreateCommandOption {
    let option = CreateCommandOption::new(CommandOptionType::String, name, description)
        .required(true);
    if choices.len() == 0 || choices.len() > MAX_CHOICES {
        return option;
    }

    choices.fold(option, |option, choice| option.add_string_choice(choice, choice))
}

fn team_option(league: &League) -> CreateCommandOption {
    let mut teams: Vec<&str> = league.clubs().iter().map(|club| club.name.as_str()).collect();
    if !teams.is_empty() {
        teams.push(FREE_AGENT);
    }

    choice_option("team", "The team name", teams.into_iter())
}

fn division_option(league: &League) -> CreateCommandOption {
    choice_option(
        "division",
        "The division",
        league.divisions().iter().map(String::as_str),
    )
}

fn hall_of_fame_option() -> CreateCommandOption {
    HallOfFame::ALL.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "position", "The position")
            .required(true),
        |option, hof| option.add_string_choice(hof.label(), hof.as_str()),
    )
}

fn management_option() -> CreateCommandOption {
    ManagementRole::ALL.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "role", "The management role")
            .required(true),
        |option, role| option.add_string_choice(role.label(), role.as_str()),
    )
}

/// Roster command definitions; team and division choices come from `league`.
pub fn definitions(league: &League) -> Vec<CreateCommand> {
    vec![
        CreateCommand::new("lookup")
            .description("Look up a player by their Roblox UserId or username")
            .add_option(userid_option()),
        CreateCommand::new("setteam")
            .description("Set a player's team")
            .add_option(userid_option())
            .add_option(team_option(league)),
        CreateCommand::new("setdivision")
            .description("Set a player's division")
            .add_option(userid_option())
            .add_option(division_option(league)),
        CreateCommand::new("setrating")
            .description("Set a player's rating")
            .add_option(userid_option())
            .add_option(
                CreateCommandOption::new(CommandOptionType::Integer, "rating", "The rating (0-100)")
                    .required(true)
                    .min_int_value(0)
                    .max_int_value(100),
            ),
        CreateCommand::new("suspend")
            .description("Suspend or unsuspend a player")
            .add_option(userid_option())
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Boolean,
                    "suspended",
                    "True to suspend, false to unsuspend",
                )
                .required(true),
            ),
        CreateCommand::new("sethof")
            .description("Set a player's Hall of Fame position")
            .add_option(userid_option())
            .add_option(hall_of_fame_option()),
        CreateCommand::new("setmanagement")
            .description("Set a player's management role")
            .add_option(userid_option())
            .add_option(management_option()),
        CreateCommand::new("setnationalteam")
            .description("Set a player's national team")
            .add_option(userid_option())
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "nationalteam",
                    "The national team name",
                )
                .required(true),
            ),
        CreateCommand::new("deleteplayer")
            .description("Delete a player from the database")
            .add_option(userid_option()),
    ]
}

fn updated(player: &Player, field: &str, value: &str) -> CommandReply {
    CommandReply::Text(format!(
        "Updated {}'s {} to **{}**",
        player.name_or_id(),
        field,
        value
    ))
}

pub async fn run(
    ctx: &CommandContext<'_>,
    name: &str,
    input: &CommandInput,
) -> Result<CommandReply, AppError> {
    let user_id = ctx.identity.resolve_identity(input.string("userid")?).await?;
    let service = PlayerService::new(ctx.db, ctx.league);

    match name {
        "lookup" => {
            let mut player = service.lookup(user_id).await?;
            if player.display_name.is_none() {
                player.display_name = service.refresh_display_name(user_id, ctx.identity).await;
            }

            Ok(CommandReply::Embed(render::player_embed(&player)))
        }
        "setteam" => {
            let player = service.set_team(user_id, input.string("team")?).await?;
            let team = player.team.clone().unwrap_or_default();
            let division = player.division.clone().unwrap_or_else(|| "None".to_string());

            Ok(CommandReply::Text(format!(
                "Updated {}'s team to **{}** (division {})",
                player.name_or_id(),
                team,
                division
            )))
        }
        "setdivision" => {
            let player = service
                .set_division(user_id, input.string("division")?)
                .await?;
            let division = player.division.clone().unwrap_or_default();

            Ok(updated(&player, "division", &division))
        }
        "setrating" => {
            let player = service
                .set_rating(user_id, input.integer("rating")?)
                .await?;

            Ok(updated(&player, "rating", &player.rating.to_string()))
        }
        "suspend" => {
            let suspended = input.boolean("suspended")?;
            let player = service.set_suspended(user_id, suspended).await?;
            let verb = if suspended { "Suspended" } else { "Unsuspended" };

            Ok(CommandReply::Text(format!("{} {}", verb, player.name_or_id())))
        }
        "sethof" => {
            let hall_of_fame: HallOfFame = input.string("position")?.parse()?;
            let player = service.set_hall_of_fame(user_id, hall_of_fame).await?;

            Ok(updated(&player, "Hall of Fame position", hall_of_fame.label()))
        }
        "setmanagement" => {
            let role: ManagementRole = input.string("role")?.parse()?;
            let player = service.set_management(user_id, role).await?;

            Ok(updated(&player, "management role", role.label()))
        }
        "setnationalteam" => {
            let player = service
                .set_national_team(user_id, input.string("nationalteam")?)
                .await?;
            let national_team = player.national_team.clone().unwrap_or_default();

            Ok(updated(&player, "national team", &national_team))
        }
        "deleteplayer" => {
            service.delete(user_id).await?;

            Ok(CommandReply::Text(format!("Deleted player {}", user_id)))
        }
        _ => Err(unknown_command(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        bot::command::{dispatch, option::OptionValue},
        error::roster::RosterError,
        rules::league::test_league,
        service::identity::StaticIdentityResolver,
    };
    use test_utils::{builder::TestBuilder, factory::player::PlayerFactory};

    fn userid(value: &str) -> CommandInput {
        CommandInput::default().with("userid", OptionValue::String(value.to_string()))
    }

    fn text(reply: CommandReply) -> String {
        match reply {
            CommandReply::Text(text) => text,
            CommandReply::Embed(embed) => panic!("expected text, got {:?}", embed),
        }
    }

    fn choice_count(commands: &[CreateCommand], name: &str, option: usize) -> usize {
        let command = commands
            .iter()
            .map(|command| serde_json::to_value(command).unwrap())
            .find(|command| command["name"] == name)
            .unwrap();

        command["options"][option]["choices"]
            .as_array()
            .map_or(0, Vec::len)
    }

    #[test]
    fn team_and_division_choices_follow_league() {
        let configured = definitions(&test_league());
        assert_eq!(choice_count(&configured, "setteam", 1), 7);
        assert_eq!(choice_count(&configured, "setdivision", 1), 3);

        let unconfigured = definitions(&League::default());
        assert_eq!(choice_count(&unconfigured, "setteam", 1), 0);
        assert_eq!(choice_count(&unconfigured, "setdivision", 1), 3);
    }

    #[tokio::test]
    async fn lookup_resolves_username_and_renders_embed() -> Result<(), AppError> {
        let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        PlayerFactory::new(db)
            .user_id(4242)
            .display_name(Some("Striker"))
            .build()
            .await?;
        let identity = StaticIdentityResolver::new().with_user("striker", 4242);
        let ctx = CommandContext {
            db,
            identity: &identity,
            league: &test_league(),
            actor_id: 1,
        };

        let reply = dispatch(&ctx, "lookup", &userid("Striker")).await?;

        let CommandReply::Embed(embed) = reply else {
            panic!("expected embed");
        };
        let embed = serde_json::to_value(embed).unwrap();
        assert_eq!(embed["title"], "Player: Striker (4242)");

        Ok(())
    }

    #[tokio::test]
    async fn setteam_reports_derived_division() -> Result<(), AppError> {
        let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        PlayerFactory::new(db)
            .user_id(10)
            .display_name(Some("Winger"))
            .build()
            .await?;
        let identity = StaticIdentityResolver::new();
        let ctx = CommandContext {
            db,
            identity: &identity,
            league: &test_league(),
            actor_id: 1,
        };

        let input = userid("10").with("team", OptionValue::String("Fenwick Albion".to_string()));
        let reply = dispatch(&ctx, "setteam", &input).await?;

        assert_eq!(
            text(reply),
            "Updated Winger's team to **Fenwick Albion** (division B)"
        );

        Ok(())
    }

    #[tokio::test]
    async fn setrating_rejects_out_of_range() -> Result<(), AppError> {
        let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        PlayerFactory::new(db).user_id(10).build().await?;
        let identity = StaticIdentityResolver::new();
        let ctx = CommandContext {
            db,
            identity: &identity,
            league: &test_league(),
            actor_id: 1,
        };

        let input = userid("10").with("rating", OptionValue::Integer(101));
        let result = dispatch(&ctx, "setrating", &input).await;

        assert!(matches!(
            result,
            Err(AppError::RosterErr(RosterError::RatingOutOfRange(101)))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn sethof_and_delete() -> Result<(), AppError> {
        let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        PlayerFactory::new(db)
            .user_id(10)
            .display_name(Some("Legend"))
            .build()
            .await?;
        let identity = StaticIdentityResolver::new();
        let ctx = CommandContext {
            db,
            identity: &identity,
            league: &test_league(),
            actor_id: 1,
        };

        let input = userid("10").with("position", OptionValue::String("Gk".to_string()));
        let reply = dispatch(&ctx, "sethof", &input).await?;
        assert_eq!(
            text(reply),
            "Updated Legend's Hall of Fame position to **Goalkeeper**"
        );

        let reply = dispatch(&ctx, "deleteplayer", &userid("10")).await?;
        assert_eq!(text(reply), "Deleted player 10");

        let result = dispatch(&ctx, "lookup", &userid("10")).await;
        assert!(matches!(
            result,
            Err(AppError::RosterErr(RosterError::PlayerNotFound(10)))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn unresolvable_userid_fails_before_store() -> Result<(), AppError> {
        let test = TestBuilder::new().with_fantasy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let identity = StaticIdentityResolver::new();
        let ctx = CommandContext {
            db,
            identity: &identity,
            league: &test_league(),
            actor_id: 1,
        };

        let result = dispatch(&ctx, "lookup", &userid("nobody")).await;

        assert!(matches!(result, Err(AppError::IdentityErr(_))));

        Ok(())
    }
}
