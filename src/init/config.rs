use crate::utils;
use crate::utils::config::{AppConfig, ConfigError};

/// Loads `.env` and reads the process configuration once.
pub fn init_config() -> Result<AppConfig, ConfigError> {
    utils::config::init();
    AppConfig::from_env()
}
