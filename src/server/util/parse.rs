use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Converts a stored external player id back to its unsigned form.
///
/// Player ids are stored as SQLite `BIGINT`; ids above `i64::MAX` never reach the store
/// because `player_id_to_db` rejects them.
pub fn player_id_from_db(value: i64) -> u64 {
    value as u64
}

/// Converts an external player id into its stored signed form.
///
/// # Returns
/// - `Ok(i64)` - Id fits the column
/// - `Err(AppError::BadRequest)` - Id exceeds `i64::MAX`
pub fn player_id_to_db(value: u64) -> Result<i64, AppError> {
    i64::try_from(value)
        .map_err(|_| AppError::BadRequest(format!("UserId {} is out of range", value)))
}
