//! Assembly: builds the teloxide bot, link client, and handler chain, then runs the REPL.

use anyhow::Result;
use shortlink_client::{HttpLinkGenerator, LinkServiceConfig};
use shortlink_conversation::{ConversationEngine, ConversationHandler, LoggingHandler};
use shortlink_core::{init_tracing, Bot, HandlerChain};
use shortlink_telegram::{run_repl, TelegramBotAdapter, TelegramConfig};
use std::sync::Arc;
use tracing::info;

const DEFAULT_LOG_FILE: &str = "shortlink-bot.log";

/// Loads config (CLI token overrides BOT_TOKEN), initializes tracing, builds the chain, and
/// starts the REPL. A missing BOT_TOKEN is fatal at this point.
pub async fn run_bot(token: Option<String>) -> Result<()> {
    let config = match token {
        Some(token) => TelegramConfig::with_token(token),
        None => TelegramConfig::from_env()?,
    };
    config.validate()?;

    let log_file = config
        .log_file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    init_tracing(&log_file)?;

    let teloxide_bot = build_teloxide_bot(&config)?;

    let service_config = LinkServiceConfig::from_env();
    info!(
        service_url = %service_config.base_url,
        timeout_secs = service_config.timeout_secs,
        "Using link service"
    );
    let generator = Arc::new(HttpLinkGenerator::new(service_config));

    let engine = Arc::new(ConversationEngine::new(generator));
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(ConversationHandler::new(engine, bot)));

    info!("Starting shortlink bot");
    run_repl(teloxide_bot, chain).await
}

fn build_teloxide_bot(config: &TelegramConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    let bot = match &config.telegram_api_url {
        Some(url) => bot.set_api_url(url.parse()?),
        None => bot,
    };
    Ok(bot)
}
