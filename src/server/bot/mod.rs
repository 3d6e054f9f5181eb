//! Discord command gateway.
//!
//! The bot registers the league's slash commands and turns each invocation into a
//! service call. Admin commands pass one capability check before any service is
//! reached; the services themselves never check permissions.
//!
//! The bot is initialized during startup and runs in a separate tokio task so it does
//! not block the REST server.

pub mod command;
pub mod handler;
pub mod permission;
pub mod render;
pub mod start;
