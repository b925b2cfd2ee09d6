use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};

use crate::conversation::ConversationSession;
use crate::texts;

/// Last in the chain: any text nobody claimed gets a hint to use /help.
pub struct FallbackHandler;

#[async_trait]
impl Handler<ConversationSession> for FallbackHandler {
    async fn handle(
        &self,
        message: &Message,
        _session: &mut ConversationSession,
    ) -> Result<HandlerResponse> {
        match message.text() {
            Some(_) => Ok(HandlerResponse::text(texts::UNKNOWN_INPUT)),
            None => Ok(HandlerResponse::Stop),
        }
    }
}
