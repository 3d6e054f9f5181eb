use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        player::{CreatePlayerDto, PlayerDto, PlayerListDto, PlayerResponseDto, UpdatePlayerDto},
    },
    server::{
        controller::parse_path_id,
        error::AppError,
        model::player::{CreatePlayerParam, Player, UpdatePlayerParam},
        service::player::PlayerService,
        state::AppState,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

fn into_list(players: Vec<Player>) -> PlayerListDto {
    PlayerListDto {
        success: true,
        players: players.into_iter().map(Player::into_dto).collect(),
    }
}

/// Get a player record.
///
/// # Returns
/// - `200 OK` - The player
/// - `400 Bad Request` - `userid` is not numeric
/// - `404 Not Found` - No player with that id
#[utoipa::path(
    get,
    path = "/player/{userid}",
    tag = PLAYER_TAG,
    params(
        ("userid" = u64, Path, description = "Roblox user id")
    ),
    responses(
        (status = 200, description = "Player record", body = PlayerResponseDto),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_path_id("userid", &user_id)?;

    let player = PlayerService::new(&state.db, &state.league).lookup(user_id).await?;

    Ok(Json(PlayerResponseDto::from(player.into_dto())))
}

/// Create a player record.
///
/// Team and division are validated against the league. Without a division the
/// division is derived from the team. Without a display name the name is fetched from
/// the identity provider on a best effort basis.
///
/// # Returns
/// - `201 Created` - The created player
/// - `400 Bad Request` - Invalid team, division, rating, price or vocabulary value
/// - `409 Conflict` - A player with that id exists
#[utoipa::path(
    post,
    path = "/player",
    tag = PLAYER_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 201, description = "Player created", body = PlayerResponseDto),
        (status = 400, description = "Invalid player data", body = ErrorDto),
        (status = 409, description = "Player already exists", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db, &state.league);

    let param = CreatePlayerParam::from_dto(payload)?;
    let mut player = service.create(param).await?;

    if player.display_name.is_none() {
        player.display_name = service
            .refresh_display_name(player.user_id, state.identity.as_ref())
            .await;
    }

    tracing::info!("Created player {} via API", player.user_id);

    Ok((
        StatusCode::CREATED,
        Json(PlayerResponseDto::from(player.into_dto())),
    ))
}

/// Partially update a player record.
///
/// Only supplied fields are written. A team change recomputes the division unless the
/// same body sets the division explicitly.
///
/// # Returns
/// - `200 OK` - The player after the update
/// - `400 Bad Request` - Invalid value
/// - `404 Not Found` - No player with that id
#[utoipa::path(
    patch,
    path = "/player/{userid}",
    tag = PLAYER_TAG,
    params(
        ("userid" = u64, Path, description = "Roblox user id")
    ),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Player updated", body = PlayerResponseDto),
        (status = 400, description = "Invalid player data", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(payload): Json<UpdatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_path_id("userid", &user_id)?;
    let param = UpdatePlayerParam::from_dto(payload)?;

    let player = PlayerService::new(&state.db, &state.league).update(user_id, param).await?;

    Ok(Json(PlayerResponseDto::from(player.into_dto())))
}

/// Delete a player record along with their fantasy selections.
///
/// # Returns
/// - `200 OK` - `{"success": true}`
/// - `404 Not Found` - No player with that id
#[utoipa::path(
    delete,
    path = "/player/{userid}",
    tag = PLAYER_TAG,
    params(
        ("userid" = u64, Path, description = "Roblox user id")
    ),
    responses(
        (status = 200, description = "Player deleted", body = SuccessDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_path_id("userid", &user_id)?;

    PlayerService::new(&state.db, &state.league).delete(user_id).await?;

    Ok(Json(SuccessDto { success: true }))
}

/// Get every player, highest rating first.
#[utoipa::path(
    get,
    path = "/players",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "All players", body = PlayerListDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_players(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::new(&state.db, &state.league).list().await?;

    Ok(Json(into_list(players)))
}

/// Get the players of one team, highest rating first.
#[utoipa::path(
    get,
    path = "/team/{teamname}",
    tag = PLAYER_TAG,
    params(
        ("teamname" = String, Path, description = "Team name, case-insensitive")
    ),
    responses(
        (status = 200, description = "Players of the team", body = PlayerListDto),
        (status = 503, description = "Database unavailable", body = ErrorDto)
    ),
)]
pub async fn get_team_players(
    State(state): State<AppState>,
    Path(team_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::new(&state.db, &state.league)
        .list_by_team(&team_name)
        .await?;

    Ok(Json(into_list(players)))
}
