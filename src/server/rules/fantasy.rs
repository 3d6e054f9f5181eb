use rust_decimal::Decimal;

/// Budget every new fantasy team starts with (90.0m).
pub const STARTING_BUDGET: Decimal = Decimal::from_parts(900, 0, 0, false, 1);

/// Fantasy price assigned to players that were never priced (5.0m).
pub const DEFAULT_PRICE: Decimal = Decimal::from_parts(50, 0, 0, false, 1);

pub const MAX_SQUAD_SIZE: usize = 9;

/// Multiplier applied to the captain's points during aggregation.
pub const CAPTAIN_MULTIPLIER: i64 = 2;
