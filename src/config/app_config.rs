use crate::error::{AppError, Result};
use std::env;
use tracing::Level;

const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Level,
}

impl AppConfig {
    /// Loads configuration from the environment. A given `api_url` replaces
    /// `PRODUCT_API_URL`, which is then never read or validated.
    pub fn from_env(api_url: Option<&str>) -> Result<Self> {
        Self::from_lookup(api_url, |key| env::var(key).ok())
    }

    pub fn from_lookup(
        api_url: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let base_url = match api_url {
            Some(url) => url.to_string(),
            None => lookup("PRODUCT_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        };

        Ok(Self {
            api: ApiConfig::new(&base_url)?,
            logging: LoggingConfig {
                level: parse_level(&lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()))?,
            },
        })
    }
}

impl ApiConfig {
    /// Every request is built from this one origin, so trailing slashes are
    /// stripped here rather than at each call site.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::ConfigError(format!(
                "Invalid PRODUCT_API_URL value: {}",
                base_url
            )));
        }

        Ok(Self {
            base_url: base_url.to_string(),
        })
    }
}

pub fn parse_level(value: &str) -> Result<Level> {
    value
        .trim()
        .parse::<Level>()
        .map_err(|_| AppError::ConfigError("Invalid LOG_LEVEL value".to_string()))
}
