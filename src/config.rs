use std::time::Duration;

use tracing::Level;

use crate::pacing::ReplyPacing;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: Option<String>,
    pub log_level: Level,
    pub pacing: ReplyPacing,
    pub mood_window_days: u32,
    pub top_emotions: usize,
}

fn parse_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue("RUST_LOG".to_string(), log_level_str.clone())
        })?;

        let defaults = ReplyPacing::default();
        let pacing = ReplyPacing {
            min_delay: Duration::from_millis(parse_var(
                "COMPANION_REPLY_DELAY_MIN_MS",
                defaults.min_delay.as_millis() as u64,
            )?),
            max_delay: Duration::from_millis(parse_var(
                "COMPANION_REPLY_DELAY_MAX_MS",
                defaults.max_delay.as_millis() as u64,
            )?),
            follow_up_delay: Duration::from_millis(parse_var(
                "COMPANION_FOLLOW_UP_DELAY_MS",
                defaults.follow_up_delay.as_millis() as u64,
            )?),
        };

        Ok(Self {
            database_url,
            log_level,
            pacing,
            mood_window_days: parse_var("COMPANION_MOOD_WINDOW_DAYS", 30)?,
            top_emotions: parse_var("COMPANION_TOP_EMOTIONS", 10)?,
        })
    }

    pub fn database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingVar("DATABASE_URL".to_string()))
    }
}
