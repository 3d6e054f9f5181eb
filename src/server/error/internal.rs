use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Results a in 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored enumeration column holds a value outside its vocabulary.
    ///
    /// Only reachable if a row was written without going through the repositories.
    #[error("Stored value '{value}' is not a valid {column}")]
    CorruptColumn {
        /// Column that held the value
        column: &'static str,
        /// The unrecognized value
        value: String,
    },
}
