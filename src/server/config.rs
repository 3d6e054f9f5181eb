use std::{net::SocketAddr, time::Duration};

use crate::server::{
    error::{config::ConfigError, AppError},
    rules::league::League,
};

const DEFAULT_API_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_ROBLOX_USERS_API_URL: &str = "https://users.roblox.com";
const DEFAULT_IDENTITY_TIMEOUT_SECS: u64 = 10;

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    /// Roles whose members may run admin commands, besides guild administrators.
    pub discord_admin_role_ids: Vec<u64>,

    pub api_addr: SocketAddr,
    /// When set, REST calls must carry a matching `x-api-key` header.
    pub api_key: Option<String>,

    pub roblox_users_api_url: String,
    pub identity_timeout: Duration,

    /// Clubs and divisions accepted on roster writes.
    pub league: League,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_admin_role_ids: parse_role_ids(
                "DISCORD_ADMIN_ROLE_IDS",
                optional("DISCORD_ADMIN_ROLE_IDS").as_deref(),
            )?,
            api_addr: api_addr(optional("API_ADDR"), optional("PORT"))?,
            api_key: optional("API_KEY"),
            roblox_users_api_url: optional("ROBLOX_USERS_API_URL")
                .unwrap_or_else(|| DEFAULT_ROBLOX_USERS_API_URL.to_string()),
            identity_timeout: Duration::from_secs(
                optional("IDENTITY_TIMEOUT_SECS")
                    .map(|value| parse_var("IDENTITY_TIMEOUT_SECS", &value))
                    .transpose()?
                    .unwrap_or(DEFAULT_IDENTITY_TIMEOUT_SECS),
            ),
            league: League::parse(
                optional("LEAGUE_TEAMS").as_deref(),
                optional("LEAGUE_DIVISIONS").as_deref(),
            )?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating blank values as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

fn parse_role_ids(name: &str, value: Option<&str>) -> Result<Vec<u64>, ConfigError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };

    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| parse_var(name, id))
        .collect()
}

/// `API_ADDR` wins; a bare `PORT` binds every interface.
fn api_addr(addr: Option<String>, port: Option<String>) -> Result<SocketAddr, ConfigError> {
    match (addr, port) {
        (Some(addr), _) => parse_var("API_ADDR", &addr),
        (None, Some(port)) => {
            let port: u16 = parse_var("PORT", &port)?;
            Ok(SocketAddr::from(([0, 0, 0, 0], port)))
        }
        (None, None) => parse_var("API_ADDR", DEFAULT_API_ADDR),
    }
}
