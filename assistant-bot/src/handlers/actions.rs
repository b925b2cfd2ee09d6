//! Inline button presses.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::warn;

use crate::conversation::ConversationSession;
use crate::features::menus;
use crate::keyboards::{ACTION_OPTION_1, ACTION_OPTION_2, ACTION_SHOW_MORE};

pub struct ActionHandler;

#[async_trait]
impl Handler<ConversationSession> for ActionHandler {
    async fn handle(
        &self,
        message: &Message,
        _session: &mut ConversationSession,
    ) -> Result<HandlerResponse> {
        let Some(action) = message.action() else {
            return Ok(HandlerResponse::Continue);
        };

        let reply = match action {
            ACTION_SHOW_MORE => menus::show_more(&message.id),
            ACTION_OPTION_1 => menus::option_chosen(1),
            ACTION_OPTION_2 => menus::option_chosen(2),
            other => {
                warn!(user_id = message.user.id, action = %other, "Unknown action");
                return Ok(HandlerResponse::Stop);
            }
        };
        Ok(HandlerResponse::Reply(reply))
    }
}
