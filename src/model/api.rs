use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing REST call.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct ErrorDto {
    /// Always `false`.
    pub success: bool,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Body of operations that return nothing but success.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct SuccessDto {
    pub success: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct HealthDto {
    pub status: String,
}
