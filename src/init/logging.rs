use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::{event, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::EnvFilter;
use crate::utils::config::{LogConfig, LogFormat};

struct LocalTimeFormatter {
    timezone: Arc<Tz>,
}

impl tracing_subscriber::fmt::time::FormatTime for LocalTimeFormatter {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now_utc: DateTime<Utc> = Utc::now();
        let now_local = now_utc.with_timezone(&*self.timezone);
        write!(w, "{}", now_local.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Turns `LOG_LEVEL` into an `EnvFilter` directive.
///
/// Numeric levels follow the zerolog scale used by earlier deployments:
/// -1 trace, 0 debug, 1 info, 2 warn, 3 to 5 error, 6 and above off.
/// Anything else is taken as a directive as-is.
pub fn level_directive(level: &str) -> String {
    match level.trim().parse::<i32>() {
        Ok(n) if n < 0 => "trace",
        Ok(0) => "debug",
        Ok(1) => "info",
        Ok(2) => "warn",
        Ok(3..=5) => "error",
        Ok(_) => "off",
        Err(_) => return level.trim().to_string(),
    }
    .to_string()
}

/// Installs the global subscriber. Keep the returned guard alive until exit,
/// dropping it flushes buffered records.
pub fn init_logging(config: &LogConfig, timezone: Arc<Tz>) -> Result<WorkerGuard, anyhow::Error> {
    let (non_blocking, guard) = match &config.path {
        Some(path) => {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(config.filename_prefix.as_str())
                .build(path)?;
            tracing_appender::non_blocking(file_appender)
        }
        None => tracing_appender::non_blocking(std::io::stdout()),
    };

    let directive = level_directive(&config.level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_timer(LocalTimeFormatter { timezone })
        .with_env_filter(filter)
        .with_writer(non_blocking);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }

    event!(Level::INFO, level = %directive, "Logging initialized!");

    Ok(guard)
}
