use thiserror::Error;

/// Failures of player roster operations.
#[derive(Error, Debug, PartialEq)]
pub enum RosterError {
    /// No player record exists for the external id.
    #[error("Player with UserId {0} not found.")]
    PlayerNotFound(u64),

    /// Create was requested for an id that already has a record.
    #[error("Player with UserId {0} already exists.")]
    PlayerAlreadyExists(u64),

    /// Team name is not part of the league vocabulary.
    #[error("Unknown team '{0}'")]
    UnknownTeam(String),

    /// Division is not part of the league vocabulary.
    #[error("Unknown division '{0}'")]
    UnknownDivision(String),

    /// Rating outside of 0..=100.
    #[error("Rating must be between 0 and 100, got {0}")]
    RatingOutOfRange(i64),

    #[error("Unknown Hall of Fame position '{0}'")]
    UnknownHallOfFame(String),

    #[error("Unknown management role '{0}'")]
    UnknownManagementRole(String),

    /// Price is negative.
    #[error("Invalid price '{0}': must be a non-negative amount")]
    InvalidPrice(String),
}
