//! Dispatcher runner: turns teloxide updates (messages and inline button presses) into
//! core messages and hands them to a [`Dispatch`].
//! Calls get_me once before polling and stores the bot username for command parsing.

use anyhow::Result;
use dbot_core::{Dispatch, ToCoreMessage};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Polls Telegram until Ctrl-C. Updates of one chat are delivered in order; different chats run
/// concurrently.
#[instrument(skip(bot, dispatch, bot_username))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    dispatch: Arc<dyn Dispatch>,
    bot_username: Arc<RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before dispatch");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed, commands addressed to the bot by name will not match"),
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![dispatch])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}

async fn on_message(msg: teloxide::types::Message, dispatch: Arc<dyn Dispatch>) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();

    let Some(text) = msg.text() else {
        info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            "Received non-text message, ignored"
        );
        return Ok(());
    };

    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        message_content = %text,
        "Received message"
    );

    if let Err(e) = dispatch.dispatch(&core_msg).await {
        error!(error = %e, user_id = core_msg.user.id, "Dispatch failed");
    }
    Ok(())
}

async fn on_callback_query(
    bot: teloxide::Bot,
    q: CallbackQuery,
    dispatch: Arc<dyn Dispatch>,
) -> ResponseResult<()> {
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!(error = %e, "Failed to answer callback query");
    }

    if q.data.is_none() {
        return Ok(());
    }

    let core_msg = TelegramCallbackWrapper(&q).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        action = %core_msg.content,
        "Received action"
    );

    if let Err(e) = dispatch.dispatch(&core_msg).await {
        error!(error = %e, user_id = core_msg.user.id, "Dispatch failed");
    }
    Ok(())
}
