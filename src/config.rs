// src/config.rs

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),

    #[error("{name} has invalid value '{value}'")]
    InvalidVar { name: &'static str, value: String },
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub host: String,
    pub port: u16,
    pub anthropic_base_url: String,
    /// Holds `index.html` and the `static/` asset folder.
    pub static_dir: PathBuf,
    pub log_level: String,
    pub log_json: bool,
}

// Keeps the API key out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("anthropic_base_url", &self.anthropic_base_url)
            .field("static_dir", &self.static_dir)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("ANTHROPIC_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingVar("ANTHROPIC_API_KEY"))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar { name: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            anthropic_base_url: lookup("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|| DEFAULT_ANTHROPIC_BASE_URL.to_string()),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            log_json: lookup("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
