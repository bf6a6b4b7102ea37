//! Telegram relay bot - main entry point.

use anyhow::Context;
use openrouter_client::OpenRouterClient;
use relay_bot::commands::build_router;
use relay_bot::config::Config;
use relay_bot::error::AppResult;
use relay_bot::{CompletionRelay, Dispatcher, SessionConfig};
use std::sync::Arc;
use telegram_client::{TelegramClient, UpdateReceiver};
use tokio::signal;
use tokio::task::{JoinError, JoinSet};
use tokio_stream::StreamExt;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level);

    info!("Starting Telegram relay bot...");

    let session = Arc::new(SessionConfig::new(&config.openrouter.model));

    let openrouter = OpenRouterClient::new(
        &config.openrouter_api_key,
        &config.openrouter.base_url,
        config.openrouter.timeout,
    )
    .context("Failed to create OpenRouter client")?;

    let relay = Arc::new(CompletionRelay::new(
        openrouter,
        session.clone(),
        config.bot.system_prompt.clone(),
        config.openrouter.max_tokens,
    ));

    let telegram = TelegramClient::new(&config.telegram.api_url, &config.telegram_token)
        .context("Failed to create Telegram client")?;

    let me = telegram
        .get_me()
        .await
        .context("Telegram API not reachable or token rejected")?;
    info!(
        "Authorized as @{}",
        me.username.as_deref().unwrap_or(&me.first_name)
    );

    let router = Arc::new(build_router(session, relay, me.username));
    info!("Registered {} command handlers", router.len());
    info!(
        "Completion endpoint: {} (model {})",
        config.openrouter.base_url, config.openrouter.model
    );

    let dispatcher = Dispatcher::new(router, Arc::new(telegram.clone()));
    let receiver = UpdateReceiver::new(telegram, config.telegram.poll_timeout);
    let mut stream = Box::pin(receiver.stream());
    let mut tasks = JoinSet::new();

    info!("Listening for messages...");

    // Main message loop
    loop {
        tokio::select! {
            Some(message) = stream.next() => {
                dispatcher.spawn(&mut tasks, message);
            }
            Some(result) = tasks.join_next(), if !tasks.is_empty() => {
                log_task_result(result);
            }
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    // Stop polling, let in-flight replies finish or time out.
    drop(stream);
    info!("Waiting for {} in-flight messages...", tasks.len());
    while let Some(result) = tasks.join_next().await {
        log_task_result(result);
    }

    info!("Shutting down...");
    Ok(())
}

fn log_task_result(result: Result<(), JoinError>) {
    if let Err(e) = result {
        error!("Message task failed: {}", e);
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
