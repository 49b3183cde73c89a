use std::env;
use std::fmt;

use thiserror::Error;
use url::Url;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_CURRENCY: &str = "ILS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing SUPABASE_URL or SUPABASE_KEY in environment ({0} not set)")]
    Missing(&'static str),

    #[error("Invalid SUPABASE_URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("SUPABASE_URL must be an http(s) URL, got {0}")]
    UnsupportedUrl(String),

    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Clone)]
pub struct Config {
    pub supabase_url: Url,
    pub supabase_key: String,
    pub port: u16,
    pub cors_origin: String,
    pub currency: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup so tests don't
    /// have to mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let supabase_url = non_empty("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let supabase_key = non_empty("SUPABASE_KEY").ok_or(ConfigError::Missing("SUPABASE_KEY"))?;

        let supabase_url = Url::parse(&supabase_url)?;
        if !matches!(supabase_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedUrl(supabase_url.to_string()));
        }

        let port = match non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            supabase_url,
            supabase_key,
            port,
            cors_origin: non_empty("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            currency: non_empty("DASHBOARD_CURRENCY").unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("supabase_url", &self.supabase_url.as_str())
            .field("supabase_key", &"********")
            .field("port", &self.port)
            .field("cors_origin", &self.cors_origin)
            .field("currency", &self.currency)
            .finish()
    }
}
