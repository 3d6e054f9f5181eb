//! Fantasy money amounts in millions.
//!
//! Prices and budgets are exact decimals. SQLite has no exact decimal type, so they
//! are stored as decimal text and parsed back at the repository boundary.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::server::error::internal::InternalError;

/// Whether `amount` may be used as a price or budget (any non-negative value).
pub fn is_valid_amount(amount: Decimal) -> bool {
    amount.is_zero() || amount.is_sign_positive()
}

/// Stored text of an amount. The scale is kept, so `85.0` stays `85.0`.
pub fn amount_to_column(amount: Decimal) -> String {
    amount.to_string()
}

/// Parses a stored amount.
///
/// # Returns
/// - `Ok(Decimal)` - Parsed amount
/// - `Err(InternalError::CorruptColumn)` - Stored text is not a decimal
pub fn amount_from_column(column: &'static str, value: &str) -> Result<Decimal, InternalError> {
    Decimal::from_str(value).map_err(|_| InternalError::CorruptColumn {
        column,
        value: value.to_string(),
    })
}
