//! Wire DTOs returned and accepted by the REST facade.

pub mod api;
pub mod fantasy;
pub mod player;
pub mod serde_id;
