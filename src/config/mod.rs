mod app_config;

pub use app_config::{ApiConfig, AppConfig, LoggingConfig, parse_level};
