//! HTTP controller endpoints for the league REST API.
//!
//! This module contains Axum handlers for the player roster and the read-only fantasy
//! views. Controllers parse path and body input, call services, and convert domain
//! models to DTOs. Every failure is returned as an `AppError` which renders the
//! `{"success": false, "error": ...}` body.

pub mod fantasy;
pub mod health;
pub mod player;

#[cfg(test)]
mod test;

use crate::server::error::AppError;

/// Parses an id path segment, rejecting anything that is not an unsigned integer.
pub(crate) fn parse_path_id(name: &str, value: &str) -> Result<u64, AppError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| AppError::BadRequest(format!("{} must be a numeric id, got '{}'", name, value)))
}
