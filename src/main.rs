use anyhow::Context;
use client_notification_bot::init::{init_config, init_logging, init_routes};
use client_notification_bot::services::telegram::TelegramBotService;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{event, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = init_config().context("failed to load config")?;

    // Dropping the guard flushes the non-blocking writer, so it lives until
    // the server has shut down.
    let log_guard = init_logging(&config.log, Arc::new(config.timezone))
        .context("failed to initialize logging")?;
    event!(Level::INFO, bot = ?config.bot, "config initialized");

    let sender = TelegramBotService::connect(&config.bot)
        .await
        .context("failed to create telegram bot service")?;

    let app = init_routes(Arc::new(sender));

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to listen on {}", config.bind))?;
    event!(Level::INFO, "server started at {}", config.bind);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    event!(Level::INFO, "shutting down");
    drop(log_guard);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        event!(Level::ERROR, "failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
    event!(Level::INFO, "shutdown signal received");
}
