use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::server::{error::AppError, state::AppState};

/// Header carrying the shared API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Paths reachable without a key.
const OPEN_PATHS: &[&str] = &["/"];

/// Rejects requests whose `x-api-key` header does not match the configured key.
///
/// Does nothing when no key is configured. The health check and the API docs stay open.
///
/// # Returns
/// - The inner response when the key matches or is not required
/// - `Err(AppError::Unauthorized)` - Header missing or wrong
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = state.api_key.as_deref() else {
        return Ok(next.run(request).await);
    };

    let path = request.uri().path();
    if OPEN_PATHS.contains(&path) || path.starts_with("/api/docs") {
        return Ok(next.run(request).await);
    }

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if provided != Some(expected) {
        tracing::debug!("Rejected request to {} with missing or wrong API key", path);
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
