//! Discord presentation of roster and fantasy results.

use rust_decimal::Decimal;
use serenity::all::{CreateEmbed, Timestamp};

use crate::server::{
    model::{
        fantasy::{LeaderboardEntry, Squad},
        gameweek::{CalculateSummary, Gameweek},
        player::Player,
    },
    rules::fantasy::MAX_SQUAD_SIZE,
};

const PLAYER_COLOR: u32 = 0x00ff00;
const FANTASY_COLOR: u32 = 0x3498db;

/// Formats an amount in millions with at least one decimal, e.g. `85.0m` or `4.25m`.
pub fn millions(amount: Decimal) -> String {
    let amount = amount.normalize();
    if amount.scale() == 0 {
        format!("{:.1}m", amount)
    } else {
        format!("{}m", amount)
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn or_none(value: Option<&str>) -> String {
    value.unwrap_or("None").to_string()
}

/// Builds the `/lookup` embed.
pub fn player_embed(player: &Player) -> CreateEmbed {
    let title = match &player.display_name {
        Some(name) => format!("Player: {} ({})", name, player.user_id),
        None => format!("Player: {}", player.user_id),
    };

    CreateEmbed::new()
        .title(title)
        .color(PLAYER_COLOR)
        .field("Team", or_none(player.team.as_deref()), true)
        .field("Division", or_none(player.division.as_deref()), true)
        .field(
            "National Team",
            or_none(player.national_team.as_deref()),
            true,
        )
        .field("Rating", player.rating.to_string(), true)
        .field("Suspended", yes_no(player.suspended), true)
        .field("Semi", yes_no(player.semi), true)
        .field("Hall of Fame", player.hall_of_fame.label(), true)
        .field("Management", player.management.label(), true)
        .field("Second Career", yes_no(player.second_career), true)
        .field("GK Mode", yes_no(player.gk_mode), true)
        .field("Country", or_none(player.country.as_deref()), true)
        .field("Fantasy Price", millions(player.fantasy_price), true)
        .timestamp(Timestamp::now())
}

/// Builds the `/fantasy team` embed.
pub fn squad_embed(squad: &Squad) -> CreateEmbed {
    let players = if squad.entries.is_empty() {
        "No players picked yet.".to_string()
    } else {
        squad
            .entries
            .iter()
            .map(|entry| {
                let name = entry
                    .player_name
                    .clone()
                    .unwrap_or_else(|| entry.selection.player_id.to_string());
                let captain = if entry.selection.is_captain { " (C)" } else { "" };

                format!(
                    "`{}` {}{} - {}",
                    entry.selection.position,
                    name,
                    captain,
                    millions(entry.price)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    CreateEmbed::new()
        .title(&squad.team.team_name)
        .color(FANTASY_COLOR)
        .field("Budget", millions(squad.team.budget), true)
        .field("Points", squad.team.total_points.to_string(), true)
        .field(
            "Squad",
            format!("{}/{}\n{}", squad.entries.len(), MAX_SQUAD_SIZE, players),
            false,
        )
}

/// Builds the `/fantasy leaderboard` embed.
pub fn leaderboard_embed(entries: &[LeaderboardEntry]) -> CreateEmbed {
    let description = if entries.is_empty() {
        "No fantasy teams registered yet.".to_string()
    } else {
        entries
            .iter()
            .map(|entry| {
                format!(
                    "**{}.** {} <@{}> - {} pts",
                    entry.rank,
                    entry.team.team_name,
                    entry.team.owner_discord_id,
                    entry.team.total_points
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    CreateEmbed::new()
        .title("Fantasy Leaderboard")
        .color(FANTASY_COLOR)
        .description(description)
}

pub fn gameweek_line(gameweek: &Gameweek) -> String {
    format!(
        "Gameweek {} ({}) started <t:{}:R>",
        gameweek.number,
        gameweek.season,
        gameweek.started_at.timestamp()
    )
}

pub fn calculate_line(summary: &CalculateSummary) -> String {
    format!(
        "Calculated gameweek {}: {} teams updated, {} points awarded.",
        summary.gameweek.number, summary.teams_updated, summary.points_awarded
    )
}
