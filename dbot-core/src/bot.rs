//! Bot abstraction for delivering replies.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide and tests substitute recorders.

use crate::error::{DbotError, Result};
use crate::reply::Reply;
use crate::types::Chat;
use async_trait::async_trait;

/// Delivers replies to a chat. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends (or, when `reply.edit_message_id` is set, edits) a message in the given chat.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()>;

    /// Sends a plain text message.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send_reply(chat, &Reply::text(text)).await
    }
}

/// Parses a message id string into an i32. Used when editing messages.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::Bot(format!("Invalid message_id for edit: {}", s)))
}
