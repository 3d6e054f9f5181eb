use axum::{response::IntoResponse, Json};

use crate::model::api::HealthDto;

pub static HEALTH_TAG: &str = "health";

/// Liveness check; never requires an API key.
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "API is running", body = HealthDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(HealthDto {
        status: "API is running".to_string(),
    })
}
