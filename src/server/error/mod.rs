//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints. The Discord command
//! gateway renders the same errors as reply text through `AppError::user_message`.

pub mod config;
pub mod fantasy;
pub mod identity;
pub mod internal;
pub mod roster;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, fantasy::FantasyError, identity::IdentityError,
        internal::InternalError, roster::RosterError,
    },
};

/// Coarse failure category shared by every caller-facing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Player, team or selection absent.
    NotFound,
    /// Duplicate registration or pick, squad or position limits.
    Conflict,
    /// Bad team, division, price or enumeration value.
    InvalidInput,
    InsufficientBudget,
    /// No active gameweek.
    StateError,
    /// Identity resolver or store failure.
    UpstreamUnavailable,
    /// Bug or corrupt data.
    Internal,
}

impl ErrorKind {
    /// HTTP status used by the REST facade for this kind.
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict | Self::StateError => StatusCode::CONFLICT,
            Self::InvalidInput | Self::InsufficientBudget => StatusCode::BAD_REQUEST,
            Self::UpstreamUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Player roster rule violation or missing player.
    #[error(transparent)]
    RosterErr(#[from] RosterError),

    /// Fantasy game rule violation.
    #[error(transparent)]
    FantasyErr(#[from] FantasyError),

    /// External identity lookup failure.
    #[error(transparent)]
    IdentityErr(#[from] IdentityError),

    /// Internal invariant violation.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Listener socket error while serving the REST facade.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request rejected because the API key header is missing or wrong.
    #[error("Invalid or missing API key")]
    Unauthorized,

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Maps the error onto the caller-facing taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RosterErr(err) => match err {
                RosterError::PlayerNotFound(_) => ErrorKind::NotFound,
                RosterError::PlayerAlreadyExists(_) => ErrorKind::Conflict,
                RosterError::UnknownTeam(_)
                | RosterError::UnknownDivision(_)
                | RosterError::RatingOutOfRange(_)
                | RosterError::UnknownHallOfFame(_)
                | RosterError::UnknownManagementRole(_)
                | RosterError::InvalidPrice(_) => ErrorKind::InvalidInput,
            },
            Self::FantasyErr(err) => match err {
                FantasyError::TeamNotRegistered
                | FantasyError::PlayerNotRegistered(_)
                | FantasyError::PlayerNotInSquad(_) => ErrorKind::NotFound,
                FantasyError::AlreadyRegistered
                | FantasyError::SquadFull(_)
                | FantasyError::DuplicatePlayer(_)
                | FantasyError::PositionLimitReached { .. } => ErrorKind::Conflict,
                FantasyError::InsufficientBudget { .. } => ErrorKind::InsufficientBudget,
                FantasyError::NoActiveGameweek => ErrorKind::StateError,
                FantasyError::UnknownPosition(_) | FantasyError::InvalidAmount(_) => {
                    ErrorKind::InvalidInput
                }
            },
            Self::IdentityErr(IdentityError::Unresolvable(_)) => ErrorKind::NotFound,
            Self::IdentityErr(_) | Self::DbErr(_) | Self::DiscordErr(_) => {
                ErrorKind::UpstreamUnavailable
            }
            Self::BadRequest(_) => ErrorKind::InvalidInput,
            Self::Unauthorized => ErrorKind::InvalidInput,
            Self::ConfigErr(_) | Self::InternalErr(_) | Self::IoErr(_) => ErrorKind::Internal,
        }
    }

    /// Message safe to show to the caller.
    ///
    /// Domain errors carry their own message; infrastructure failures are logged in full
    /// and replaced by a generic message to avoid leaking implementation details.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::UpstreamUnavailable if !matches!(self, Self::IdentityErr(_)) => {
                tracing::error!("Upstream failure: {}", self);
                "The league database is unavailable, please try again later.".to_string()
            }
            ErrorKind::Internal => {
                tracing::error!("Internal error: {}", self);
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Replaces a unique constraint violation reported by the store with `conflict`.
    ///
    /// Any other error is returned unchanged.
    pub fn or_on_unique_violation(self, conflict: impl Into<AppError>) -> AppError {
        let unique = matches!(
            &self,
            Self::DbErr(err)
                if matches!(err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
        );

        if unique {
            conflict.into()
        } else {
            self
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an HTTP status code through its `ErrorKind` and returns
/// `{"success": false, "error": "..."}`. Infrastructure errors are logged with full
/// details but return generic messages.
///
/// # Returns
/// - 400 Bad Request - Invalid input or insufficient budget
/// - 401 Unauthorized - Missing or wrong API key
/// - 404 Not Found - Player, team or selection absent
/// - 409 Conflict - Rule conflicts and missing active gameweek
/// - 503 Service Unavailable - Store or identity provider failure
/// - 500 Internal Server Error - Everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            ref err => err.kind().status_code(),
        };

        (status, Json(ErrorDto::new(self.user_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn maps_fantasy_errors_onto_taxonomy() {
        let cases = [
            (FantasyError::AlreadyRegistered, ErrorKind::Conflict),
            (FantasyError::SquadFull(9), ErrorKind::Conflict),
            (FantasyError::PlayerNotInSquad(1), ErrorKind::NotFound),
            (FantasyError::NoActiveGameweek, ErrorKind::StateError),
            (
                FantasyError::InsufficientBudget {
                    price: Decimal::new(100, 1),
                    budget: Decimal::new(50, 1),
                },
                ErrorKind::InsufficientBudget,
            ),
        ];

        for (err, kind) in cases {
            assert_eq!(AppError::from(err).kind(), kind);
        }
    }

    #[test]
    fn store_failures_are_upstream_unavailable() {
        let err = AppError::from(sea_orm::DbErr::Custom("disk full".to_string()));

        assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
        assert_eq!(err.kind().status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(!err.user_message().contains("disk full"));
    }

    #[test]
    fn only_unique_violations_become_conflicts() {
        let err = AppError::from(sea_orm::DbErr::Custom("disk full".to_string()))
            .or_on_unique_violation(FantasyError::AlreadyRegistered);
        assert!(matches!(err, AppError::DbErr(_)));

        let err = AppError::from(RosterError::PlayerNotFound(1))
            .or_on_unique_violation(RosterError::PlayerAlreadyExists(1));
        assert!(matches!(
            err,
            AppError::RosterErr(RosterError::PlayerNotFound(1))
        ));
    }

    #[test]
    fn domain_errors_keep_their_message() {
        let err = AppError::from(RosterError::PlayerNotFound(42));

        assert_eq!(err.user_message(), "Player with UserId 42 not found.");
        assert_eq!(err.kind().status_code(), StatusCode::NOT_FOUND);
    }
}
