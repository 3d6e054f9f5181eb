use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        fantasy::{GameweekDto, GameweekStatsDto, LeaderboardDto, SquadDto},
    },
    server::{
        controller::parse_path_id,
        error::AppError,
        model::{fantasy::LeaderboardEntry, gameweek::PlayerStat},
        service::fantasy::{gameweek::GameweekService, roster::FantasyRosterService},
        state::AppState,
    },
};

/// Tag for grouping fantasy endpoints in OpenAPI documentation
pub static FANTASY_TAG: &str = "fantasy";

const MAX_LEADERBOARD_LIMIT: u64 = 100;

#[derive(Deserialize, IntoParams)]
pub struct LeaderboardParams {
    /// Number of teams to return, at most 100.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

/// Get the fantasy leaderboard.
#[utoipa::path(
    get,
    path = "/fantasy/leaderboard",
    tag = FANTASY_TAG,
    params(LeaderboardParams),
    responses(
        (status = 200, description = "Teams ordered by total points", body = LeaderboardDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Result<impl IntoResponse, AppError> {
    let limit = params.limit.clamp(1, MAX_LEADERBOARD_LIMIT);

    let entries = FantasyRosterService::new(&state.db)
        .leaderboard(limit)
        .await?;

    Ok(Json(LeaderboardDto {
        success: true,
        teams: entries.into_iter().map(LeaderboardEntry::into_dto).collect(),
    }))
}

/// Get the fantasy team and squad owned by a Discord user.
#[utoipa::path(
    get,
    path = "/fantasy/team/{owner_id}",
    tag = FANTASY_TAG,
    params(
        ("owner_id" = String, Path, description = "Discord user id of the owner")
    ),
    responses(
        (status = 200, description = "Team with its squad", body = SquadDto),
        (status = 400, description = "Invalid owner id", body = ErrorDto),
        (status = 404, description = "Owner has no fantasy team", body = ErrorDto)
    ),
)]
pub async fn get_fantasy_team(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let owner_id = parse_path_id("owner_id", &owner_id)?;

    let squad = FantasyRosterService::new(&state.db).squad(owner_id).await?;

    Ok(Json(squad.into_dto()))
}

/// Get the active gameweek.
#[utoipa::path(
    get,
    path = "/fantasy/gameweek",
    tag = FANTASY_TAG,
    responses(
        (status = 200, description = "Active gameweek", body = GameweekDto),
        (status = 409, description = "No active gameweek", body = ErrorDto)
    ),
)]
pub async fn get_gameweek(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let gameweek = GameweekService::new(&state.db).active_gameweek().await?;

    Ok(Json(gameweek.into_dto()))
}

/// Get every stat row entered for the active gameweek.
#[utoipa::path(
    get,
    path = "/fantasy/gameweek/stats",
    tag = FANTASY_TAG,
    responses(
        (status = 200, description = "Active gameweek with its stat rows", body = GameweekStatsDto),
        (status = 409, description = "No active gameweek", body = ErrorDto)
    ),
)]
pub async fn get_gameweek_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let (gameweek, stats) = GameweekService::new(&state.db).stats().await?;

    Ok(Json(GameweekStatsDto {
        gameweek: gameweek.into_dto(),
        stats: stats.into_iter().map(PlayerStat::into_dto).collect(),
    }))
}
