//! Core types: user, chat, inbound message, handler response, and the Handler / Dispatch traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::reply::Reply;

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// First and last name joined by a space; `None` when both are missing or blank.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// What the user did: typed text, or pressed an inline button carrying an action id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Text,
    Action(String),
}

/// A single inbound event with user, chat and content.
///
/// For [`MessageKind::Action`] the `id` is the id of the bot message that carried the button, so a
/// handler can edit it in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub kind: MessageKind,
    pub direction: MessageDirection,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Text content for typed messages; `None` for structured actions.
    pub fn text(&self) -> Option<&str> {
        match self.kind {
            MessageKind::Text => Some(self.content.as_str()),
            MessageKind::Action(_) => None,
        }
    }

    /// Action id for inline button presses.
    pub fn action(&self) -> Option<&str> {
        match &self.kind {
            MessageKind::Action(id) => Some(id.as_str()),
            MessageKind::Text => None,
        }
    }

    /// True when the text starts with `/`.
    pub fn is_command(&self) -> bool {
        self.text().is_some_and(|t| t.trim_start().starts_with('/'))
    }
}

/// Direction of the message (from user or from bot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageDirection {
    Incoming,
    Outgoing,
}

/// Handler result for the chain. `Reply` carries the outbound reply so later handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no reply.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and send this reply.
    Reply(Reply),
}

impl HandlerResponse {
    /// Shorthand for a plain-text reply.
    pub fn text(text: impl Into<String>) -> Self {
        HandlerResponse::Reply(Reply::text(text))
    }
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after, generic over the per-user session `S`.
/// Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler<S: Send + Sync>: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message, _session: &S) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message with mutable access to the sender's session. Return Stop or Reply to end the handle phase.
    async fn handle(
        &self,
        _message: &Message,
        _session: &mut S,
    ) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

/// Entry point the transport calls for every inbound message or action.
#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(&self, message: &Message) -> crate::error::Result<HandlerResponse>;
}
