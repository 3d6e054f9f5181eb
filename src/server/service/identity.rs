//! External identity resolution.
//!
//! Players are keyed by their Roblox user id. Commands accept either that id or a
//! username, so usernames are resolved through the Roblox users API. Display names are
//! fetched from the same API and cached on the player record. Neither call is used for
//! authorization and both may fail without affecting the core operations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::server::error::identity::IdentityError;

/// Resolves user input to external player ids and display names.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolves a numeric id or a username to an external id.
    ///
    /// # Returns
    /// - `Ok(u64)` - External user id
    /// - `Err(IdentityError::Unresolvable)` - No account matches the input
    /// - `Err(IdentityError)` - Provider unreachable or returned an error
    async fn resolve_identity(&self, input: &str) -> Result<u64, IdentityError>;

    /// Fetches the current display name of an external id.
    async fn fetch_display_name(&self, user_id: u64) -> Result<String, IdentityError>;
}

/// Parses numeric input as an external id without any network call.
fn parse_numeric_id(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UsernamesRequest<'a> {
    usernames: [&'a str; 1],
    exclude_banned_users: bool,
}

#[derive(Deserialize)]
struct UsernamesResponse {
    data: Vec<UsernameMatch>,
}

#[derive(Deserialize)]
struct UsernameMatch {
    id: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserResponse {
    name: String,
    display_name: Option<String>,
}

/// Identity resolver backed by the Roblox users API.
pub struct RobloxIdentityResolver {
    http_client: reqwest::Client,
    base_url: String,
}

impl RobloxIdentityResolver {
    /// Creates a resolver using `http_client` against `base_url`.
    ///
    /// # Arguments
    /// - `http_client` - Client carrying the outbound timeout
    /// - `base_url` - API root such as `https://users.roblox.com`
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl IdentityResolver for RobloxIdentityResolver {
    async fn resolve_identity(&self, input: &str) -> Result<u64, IdentityError> {
        if let Some(id) = parse_numeric_id(input) {
            return Ok(id);
        }

        let username = input.trim();
        if username.is_empty() {
            return Err(IdentityError::Unresolvable(input.to_string()));
        }

        let response = self
            .http_client
            .post(format!("{}/v1/usernames/users", self.base_url))
            .json(&UsernamesRequest {
                usernames: [username],
                exclude_banned_users: false,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(
                "Username lookup for '{}' failed with status {}",
                username,
                response.status()
            );
            return Err(IdentityError::Unavailable(format!(
                "username lookup returned {}",
                response.status()
            )));
        }

        let body: UsernamesResponse = response.json().await?;

        body.data
            .first()
            .map(|user| user.id)
            .ok_or_else(|| IdentityError::Unresolvable(username.to_string()))
    }

    async fn fetch_display_name(&self, user_id: u64) -> Result<String, IdentityError> {
        let response = self
            .http_client
            .get(format!("{}/v1/users/{}", self.base_url, user_id))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(IdentityError::Unresolvable(user_id.to_string()));
        }
        if !response.status().is_success() {
            return Err(IdentityError::Unavailable(format!(
                "user lookup returned {}",
                response.status()
            )));
        }

        let user: UserResponse = response.json().await?;

        Ok(user
            .display_name
            .filter(|name| !name.is_empty())
            .unwrap_or(user.name))
    }
}

#[cfg(test)]
use std::collections::HashMap;

/// In-memory resolver over a fixed username table.
///
/// Numeric input resolves to itself like the HTTP resolver; usernames are matched
/// case-insensitively. Display names are the table entries.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityResolver {
    users: HashMap<String, u64>,
}

#[cfg(test)]
impl StaticIdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a username to the table.
    pub fn with_user(mut self, username: &str, user_id: u64) -> Self {
        self.users.insert(username.to_lowercase(), user_id);
        self
    }
}

#[cfg(test)]
#[async_trait]
impl IdentityResolver for StaticIdentityResolver {
    async fn resolve_identity(&self, input: &str) -> Result<u64, IdentityError> {
        if let Some(id) = parse_numeric_id(input) {
            return Ok(id);
        }

        self.users
            .get(&input.trim().to_lowercase())
            .copied()
            .ok_or_else(|| IdentityError::Unresolvable(input.to_string()))
    }

    async fn fetch_display_name(&self, user_id: u64) -> Result<String, IdentityError> {
        self.users
            .iter()
            .find(|(_, id)| **id == user_id)
            .map(|(name, _)| name.clone())
            .ok_or_else(|| IdentityError::Unresolvable(user_id.to_string()))
    }
}
