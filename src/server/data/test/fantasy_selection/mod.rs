use crate::server::{
    data::fantasy::selection::FantasySelectionRepository,
    error::{fantasy::FantasyError, AppError},
    model::fantasy::FantasyPosition,
};
use test_utils::{builder::TestBuilder, factory};

mod captain;
mod create;
mod delete;
