use chrono_tz::Tz;
use dotenv::dotenv;
use std::fmt;
use std::sync::Once;
use std::time::Duration;

static INIT: Once = Once::new();

const DEFAULT_BIND: &str = "0.0.0.0:3000";
const DEFAULT_TIMEZONE: &str = "Europe/Moscow";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
const DEFAULT_TELEGRAM_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_PATH: &str = "./logs";
const DEFAULT_LOG_FILENAME_PREFIX: &str = "notification-bot.log";

/// Loads `.env` into the process environment. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        dotenv().ok();
    });
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bot token required")]
    MissingBotToken,

    #[error("bot chat id required")]
    MissingChatId,

    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub chat_id: i64,
    pub api_url: String,
    pub timeout: Duration,
}

// The token is a credential; keep it out of `{:?}` output.
impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl BotConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<BotConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = get_string(lookup, "BOT_TOKEN", "");
        if bot_token.is_empty() {
            return Err(ConfigError::MissingBotToken);
        }

        let chat_id = get_string(lookup, "CHAT_ID", "")
            .parse::<i64>()
            .unwrap_or(0);
        if chat_id == 0 {
            return Err(ConfigError::MissingChatId);
        }

        let api_url = get_string(lookup, "TELEGRAM_API_URL", DEFAULT_TELEGRAM_API_URL)
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = get_u64(lookup, "TELEGRAM_TIMEOUT_SECS", DEFAULT_TELEGRAM_TIMEOUT_SECS)?;

        Ok(BotConfig {
            bot_token,
            chat_id,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Raw `LOG_LEVEL`: a numeric level or an `EnvFilter` directive.
    pub level: String,
    pub format: LogFormat,
    /// `None` writes to stdout instead of rotated files.
    pub path: Option<String>,
    pub filename_prefix: String,
}

impl LogConfig {
    pub fn from_lookup<F>(lookup: &F) -> LogConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match get_string(lookup, "LOG_FORMAT", "json").as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        };

        // An explicitly empty LOG_PATH selects stdout.
        let path = match lookup("LOG_PATH") {
            Some(path) if path.is_empty() => None,
            Some(path) => Some(path),
            None => Some(DEFAULT_LOG_PATH.to_string()),
        };

        LogConfig {
            level: get_string(lookup, "LOG_LEVEL", DEFAULT_LOG_LEVEL),
            format,
            path,
            filename_prefix: get_string(lookup, "LOG_FILENAME_PREFIX", DEFAULT_LOG_FILENAME_PREFIX),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: String,
    pub timezone: Tz,
    pub bot: BotConfig,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<AppConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timezone_name = get_string(lookup, "TIMEZONE", DEFAULT_TIMEZONE);
        let timezone = timezone_name
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(timezone_name.clone()))?;

        Ok(AppConfig {
            bind: get_string(lookup, "BIND", DEFAULT_BIND),
            timezone,
            bot: BotConfig::from_lookup(lookup)?,
            log: LogConfig::from_lookup(lookup),
        })
    }
}

fn get_string<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

fn get_u64<F>(lookup: &F, key: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.is_empty() => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        _ => Ok(default),
    }
}
