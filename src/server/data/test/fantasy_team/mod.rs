use crate::server::{
    data::fantasy::team::FantasyTeamRepository,
    error::{fantasy::FantasyError, AppError, ErrorKind},
};
use rust_decimal::Decimal;
use test_utils::{builder::TestBuilder, factory};

mod adjust_budget;
mod create;
mod find_by_owner;
mod get_leaderboard;
