use std::collections::HashMap;
use std::env;
use std::time::Duration;
use url::Url;

use crate::application::services::RelayPacing;

const DEFAULT_API_URL: &str = "http://localhost:8001";
const DEFAULT_CHAT_MODEL: &str = "llama3.2:latest";
pub const LOCAL_USER_ID: &str = "local-user";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthSettings {
    /// Single-user deployment: every request acts as [`LOCAL_USER_ID`].
    Local,
    /// Bearer token to user id.
    Tokens(HashMap<String, String>),
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub db_pool_size: u32,
    pub api_url: Url,
    pub backend_timeout: Duration,
    pub default_chat_model: String,
    pub port: u16,
    pub auth: AuthSettings,
    pub pacing: RelayPacing,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let api_url = lookup("API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&api_url).map_err(|e| ConfigError::Invalid {
            key: "API_URL",
            message: e.to_string(),
        })?;

        let auth = match lookup("AUTH_MODE").as_deref().unwrap_or("local") {
            "local" => AuthSettings::Local,
            "token" => AuthSettings::Tokens(parse_tokens(
                &lookup("AUTH_TOKENS").unwrap_or_default(),
            )?),
            other => {
                return Err(ConfigError::Invalid {
                    key: "AUTH_MODE",
                    message: format!("expected 'local' or 'token', got '{}'", other),
                });
            }
        };

        Ok(Self {
            database_url,
            db_pool_size: parse_or(&lookup, "DB_POOL_SIZE", 10)?,
            api_url,
            backend_timeout: Duration::from_secs(parse_or(&lookup, "BACKEND_TIMEOUT_SECS", 120)?),
            default_chat_model: lookup("DEFAULT_CHAT_MODEL")
                .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            auth,
            pacing: RelayPacing {
                reasoning_step: Duration::from_millis(parse_or(
                    &lookup,
                    "RELAY_REASONING_DELAY_MS",
                    150,
                )?),
                text_burst: Duration::from_millis(parse_or(&lookup, "RELAY_TEXT_DELAY_MS", 30)?),
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Parses `token=user,token2=user2`.
fn parse_tokens(raw: &str) -> Result<HashMap<String, String>, ConfigError> {
    let mut tokens = HashMap::new();
    for pair in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (token, user_id) = pair.split_once('=').ok_or_else(|| ConfigError::Invalid {
            key: "AUTH_TOKENS",
            message: format!("expected token=user_id, got '{}'", pair),
        })?;
        tokens.insert(token.trim().to_string(), user_id.trim().to_string());
    }

    if tokens.is_empty() {
        return Err(ConfigError::Invalid {
            key: "AUTH_TOKENS",
            message: "token auth needs at least one token".to_string(),
        });
    }
    Ok(tokens)
}
