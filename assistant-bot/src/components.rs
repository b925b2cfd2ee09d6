//! Component factory: builds the store, gateway, teloxide bot and handler chain from config.
//! Isolates assembly from the runner so tests can build a router over stub collaborators.

use std::sync::Arc;

use anyhow::Result;
use dbot_core::{Bot, Reply};
use dbot_telegram::{build_teloxide_bot, TelegramConfig};
use gateway::Gateway;
use handler_chain::{HandlerChain, MessageRouter};
use storage::{SqliteUserStore, UserStore};
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::config::BotConfig;
use crate::conversation::ConversationSession;
use crate::handlers::{
    ActionHandler, ButtonHandler, CommandHandler, FallbackHandler, FlowHandler, LoggingHandler,
};
use crate::texts;

/// Collaborators every handler may need.
#[derive(Clone)]
pub struct AppServices {
    pub store: Arc<dyn UserStore>,
    pub gateway: Gateway,
    /// Filled by the dispatcher after `get_me`; commands addressed to other bots are ignored.
    pub bot_username: Arc<RwLock<Option<String>>>,
}

impl AppServices {
    pub fn new(store: Arc<dyn UserStore>, gateway: Gateway) -> Self {
        Self {
            store,
            gateway,
            bot_username: Arc::new(RwLock::new(None)),
        }
    }
}

pub struct BotComponents {
    pub services: AppServices,
    pub teloxide_bot: teloxide::Bot,
}

#[instrument(skip(config))]
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let store = SqliteUserStore::new(&config.database_url)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                database_url = %config.database_url,
                "Failed to initialize user store"
            );
            anyhow::anyhow!("Failed to initialize user store: {}", e)
        })?;
    info!(database_url = %config.database_url, "User store ready");

    let gateway = Gateway::from_config(&config.gateway_config())
        .map_err(|e| anyhow::anyhow!("Failed to build API gateway: {}", e))?;

    let mut telegram_config = TelegramConfig::with_token(config.bot_token.clone());
    if let Some(url) = &config.telegram_api_url {
        telegram_config = telegram_config.with_api_url(url.clone());
    }
    let teloxide_bot = build_teloxide_bot(&telegram_config);

    Ok(BotComponents {
        services: AppServices::new(Arc::new(store), gateway),
        teloxide_bot,
    })
}

/// Logging → flow → commands → buttons → inline actions → fallback.
pub fn build_handler_chain(services: &AppServices) -> HandlerChain<ConversationSession> {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(FlowHandler::new(
            services.store.clone(),
            services.gateway.clone(),
            services.bot_username.clone(),
        )))
        .add_handler(Arc::new(CommandHandler::new(
            services.store.clone(),
            services.gateway.clone(),
            services.bot_username.clone(),
        )))
        .add_handler(Arc::new(ButtonHandler::new(
            services.store.clone(),
            services.gateway.clone(),
        )))
        .add_handler(Arc::new(ActionHandler))
        .add_handler(Arc::new(FallbackHandler))
}

pub fn build_router(services: &AppServices, bot: Arc<dyn Bot>) -> MessageRouter<ConversationSession> {
    MessageRouter::new(build_handler_chain(services), bot).with_failure_reply(Reply::text(texts::FAILURE))
}
