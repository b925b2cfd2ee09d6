//! Startup sequence: validate config, init tracing, build components, run the dispatcher.

use std::sync::Arc;

use anyhow::Result;
use dbot_core::init_tracing;
use dbot_telegram::{run_dispatcher, TelegramBotAdapter};
use tracing::{info, instrument, warn};

use crate::components::{build_bot_components, build_router};
use crate::config::BotConfig;

#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    for key in config.missing_api_keys() {
        warn!(key, "API key not set, the matching feature will report errors");
    }
    info!(
        database_url = %config.database_url,
        http_timeout_secs = config.http_timeout_secs,
        "Initializing bot"
    );

    let components = build_bot_components(&config).await?;
    let bot = Arc::new(TelegramBotAdapter::new(components.teloxide_bot.clone()));
    let router = Arc::new(build_router(&components.services, bot));

    info!("Starting dispatcher");
    run_dispatcher(
        components.teloxide_bot,
        router,
        components.services.bot_username.clone(),
    )
    .await
}
