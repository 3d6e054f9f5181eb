use rust_decimal::Decimal;
use thiserror::Error;

use crate::server::model::fantasy::FantasyPosition;

/// Failures of the fantasy roster engine and the gameweek orchestrator.
#[derive(Error, Debug, PartialEq)]
pub enum FantasyError {
    /// Owner already has a fantasy team.
    #[error("You already have a fantasy team.")]
    AlreadyRegistered,

    /// Owner has no fantasy team yet.
    #[error("No fantasy team registered for this user. Use /fantasy register first.")]
    TeamNotRegistered,

    /// The picked player has no roster record.
    #[error("Player {0} is not registered in the league database.")]
    PlayerNotRegistered(u64),

    #[error("Insufficient budget: player costs {price}m but only {budget}m remains.")]
    InsufficientBudget { price: Decimal, budget: Decimal },

    #[error("Your squad is full ({0} players).")]
    SquadFull(usize),

    #[error("Player {0} is already in your squad.")]
    DuplicatePlayer(u64),

    #[error("You already have the maximum of {limit} {position} players.")]
    PositionLimitReached {
        position: FantasyPosition,
        limit: usize,
    },

    #[error("Player {0} is not in your squad.")]
    PlayerNotInSquad(u64),

    #[error("There is no active gameweek.")]
    NoActiveGameweek,

    #[error("Unknown position '{0}', expected one of GK, DEF, MID, ATT.")]
    UnknownPosition(String),

    /// Negative budget or price amount.
    #[error("Invalid amount '{0}': must be a non-negative amount")]
    InvalidAmount(String),
}
