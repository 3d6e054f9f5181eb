//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed
//! by the REST facade. The state is initialized once during startup and then cloned
//! for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{rules::league::League, service::identity::IdentityResolver};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn IdentityResolver>` and `Arc<League>` are reference-counted pointers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Resolver for usernames and display names, shared with the Discord bot.
    pub identity: Arc<dyn IdentityResolver>,

    /// Club and division vocabulary for roster writes.
    pub league: Arc<League>,

    /// Expected `x-api-key` header value; `None` leaves the API open.
    pub api_key: Option<String>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        identity: Arc<dyn IdentityResolver>,
        league: Arc<League>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            db,
            identity,
            league,
            api_key,
        }
    }
}
