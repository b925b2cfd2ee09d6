//! Adapters from Telegram (teloxide) types to dbot_core types.
//! Depends only on teloxide and dbot_core type definitions.

use dbot_core::{Chat, Message, MessageDirection, MessageKind, ToCoreMessage, ToCoreUser, User};
use teloxide::types::CallbackQuery;

fn chat_type(chat: &teloxide::types::Chat) -> String {
    if chat.is_private() {
        "private".to_string()
    } else if chat.is_channel() {
        "channel".to_string()
    } else {
        "group".to_string()
    }
}

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`] of kind Text.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: self.0.chat.id.0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: chat_type(&self.0.chat),
            },
            content: self.0.text().unwrap_or("").to_string(),
            kind: MessageKind::Text,
            direction: MessageDirection::Incoming,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Wraps an inline button press. The core message id is the id of the message carrying the
/// button; the chat falls back to the presser's private chat when that message is unavailable.
pub struct TelegramCallbackWrapper<'a>(pub &'a CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Message {
        let q = self.0;
        let user = TelegramUserWrapper(&q.from).to_core();
        let (id, chat) = match q.message.as_ref() {
            Some(m) => (
                m.id().to_string(),
                Chat {
                    id: m.chat().id.0,
                    chat_type: chat_type(m.chat()),
                },
            ),
            None => (
                String::new(),
                Chat {
                    id: user.id,
                    chat_type: "private".to_string(),
                },
            ),
        };
        let action = q.data.clone().unwrap_or_default();

        Message {
            id,
            user,
            chat,
            content: action.clone(),
            kind: MessageKind::Action(action),
            direction: MessageDirection::Incoming,
            created_at: chrono::Utc::now(),
        }
    }
}
