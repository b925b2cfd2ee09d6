//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends replies via Telegram;
//! tests can substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{
    parse_message_id, Bot as CoreBot, Chat, DbotError, InlineButton, Markup, Reply, Result,
    TextFormat,
};
use teloxide::prelude::*;
use teloxide::types::{
    ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, KeyboardButton, KeyboardMarkup,
    MessageId, ParseMode, ReplyMarkup,
};
use tracing::{error, warn};

use crate::config::TelegramConfig;

/// Builds a teloxide Bot, pointing it at `telegram_api_url` when set and valid.
pub fn build_teloxide_bot(config: &TelegramConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url.as_deref() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

fn bot_error(e: teloxide::RequestError) -> DbotError {
    DbotError::Bot(e.to_string())
}

fn parse_mode(format: TextFormat) -> Option<ParseMode> {
    match format {
        TextFormat::Plain => None,
        TextFormat::Html => Some(ParseMode::Html),
    }
}

/// Inline rows; URL buttons with an unparsable URL are dropped.
fn inline_markup(rows: &[Vec<InlineButton>]) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .filter_map(|button| match button {
                    InlineButton::Callback { label, action } => {
                        Some(InlineKeyboardButton::callback(label.clone(), action.clone()))
                    }
                    InlineButton::Url { label, url } => match reqwest::Url::parse(url) {
                        Ok(url) => Some(InlineKeyboardButton::url(label.clone(), url)),
                        Err(e) => {
                            warn!(error = %e, url = %url, "Skipping inline button with invalid URL");
                            None
                        }
                    },
                })
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

fn reply_markup(markup: &Markup) -> ReplyMarkup {
    match markup {
        Markup::Keyboard(rows) => {
            let rows: Vec<Vec<KeyboardButton>> = rows
                .iter()
                .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())).collect())
                .collect();
            KeyboardMarkup::new(rows).resize_keyboard().into()
        }
        Markup::Inline(rows) => inline_markup(rows).into(),
    }
}

impl TelegramBotAdapter {
    async fn edit(&self, chat_id: ChatId, message_id: &str, reply: &Reply) -> Result<()> {
        let message_id = MessageId(parse_message_id(message_id)?);
        let mut request = self
            .bot
            .edit_message_text(chat_id, message_id, reply.text.clone());
        if let Some(mode) = parse_mode(reply.format) {
            request = request.parse_mode(mode);
        }
        if let Some(Markup::Inline(rows)) = &reply.markup {
            request = request.reply_markup(inline_markup(rows));
        }
        request.await.map_err(bot_error)?;
        Ok(())
    }

    async fn photo(&self, chat_id: ChatId, photo_url: &str, reply: &Reply) -> Result<()> {
        let url = reqwest::Url::parse(photo_url)
            .map_err(|e| DbotError::Bot(format!("Invalid photo URL {}: {}", photo_url, e)))?;
        let mut request = self.bot.send_photo(chat_id, InputFile::url(url));
        if !reply.text.is_empty() {
            request = request.caption(reply.text.clone());
        }
        if let Some(mode) = parse_mode(reply.format) {
            request = request.parse_mode(mode);
        }
        if let Some(markup) = &reply.markup {
            request = request.reply_markup(reply_markup(markup));
        }
        request.await.map_err(bot_error)?;
        Ok(())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let chat_id = ChatId(chat.id);

        if let Some(message_id) = &reply.edit_message_id {
            return self.edit(chat_id, message_id, reply).await;
        }
        if let Some(photo_url) = &reply.photo_url {
            return self.photo(chat_id, photo_url, reply).await;
        }

        let mut request = self.bot.send_message(chat_id, reply.text.clone());
        if let Some(mode) = parse_mode(reply.format) {
            request = request.parse_mode(mode);
        }
        if let Some(markup) = &reply.markup {
            request = request.reply_markup(reply_markup(markup));
        }
        request.await.map_err(bot_error)?;
        Ok(())
    }
}
