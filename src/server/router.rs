//! HTTP routing and OpenAPI documentation configuration.
//!
//! All REST endpoints are registered here with their OpenAPI specifications, and
//! Swagger UI is served at `/api/docs`.

use axum::{middleware, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, middleware::api_key::require_api_key, state::AppState};

/// Builds the REST router with every endpoint, Swagger UI and the request layers.
///
/// # Registered Endpoints
/// - `GET /` - Health check
/// - `GET|PATCH|DELETE /player/{userid}` - Single player record
/// - `POST /player` - Create a player
/// - `GET /players` - All players by rating
/// - `GET /team/{teamname}` - Players of a team
/// - `GET /fantasy/leaderboard` - Fantasy leaderboard
/// - `GET /fantasy/team/{owner_id}` - Fantasy squad of an owner
/// - `GET /fantasy/gameweek` - Active gameweek
/// - `GET /fantasy/gameweek/stats` - Stat rows of the active gameweek
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
pub fn router(state: AppState) -> Router {
    #[derive(OpenApi)]
    #[openapi(info(title = "League Bot", description = "League roster and fantasy API"), tags(
        (name = controller::health::HEALTH_TAG, description = "Liveness"),
        (name = controller::player::PLAYER_TAG, description = "Player roster"),
        (name = controller::fantasy::FANTASY_TAG, description = "Fantasy league views"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::player::create_player))
        .routes(routes!(
            controller::player::get_player,
            controller::player::update_player,
            controller::player::delete_player
        ))
        .routes(routes!(controller::player::get_players))
        .routes(routes!(controller::player::get_team_players))
        .routes(routes!(controller::fantasy::get_leaderboard))
        .routes(routes!(controller::fantasy::get_fantasy_team))
        .routes(routes!(controller::fantasy::get_gameweek))
        .routes(routes!(controller::fantasy::get_gameweek_stats))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
