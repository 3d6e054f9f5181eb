use crate::server::{
    data::player::PlayerRepository,
    error::AppError,
    model::player::{CreatePlayerParam, HallOfFame, ManagementRole},
};
use rust_decimal::Decimal;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all_by_rating;
mod get_by_team;
mod set_fantasy_price;
mod update;
