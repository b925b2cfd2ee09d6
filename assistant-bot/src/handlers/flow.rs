//! Feeds text to the active flow. Escape commands reset the session and fall through to the
//! command handler; commands addressed to other bots are dropped; everything else typed during
//! a flow is flow input.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use gateway::Gateway;
use handler_chain::Session;
use storage::UserStore;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::commands::{is_escape_command, is_foreign_command};
use crate::conversation::{ActiveFlow, ConversationSession};
use crate::features::{finance, weather};

pub struct FlowHandler {
    store: Arc<dyn UserStore>,
    gateway: Gateway,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl FlowHandler {
    pub fn new(
        store: Arc<dyn UserStore>,
        gateway: Gateway,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            store,
            gateway,
            bot_username,
        }
    }
}

#[async_trait]
impl Handler<ConversationSession> for FlowHandler {
    async fn handle(
        &self,
        message: &Message,
        session: &mut ConversationSession,
    ) -> Result<HandlerResponse> {
        let Some(text) = message.text() else {
            return Ok(HandlerResponse::Continue);
        };
        let user_id = message.user.id;

        let username = self.bot_username.read().await.clone();
        if is_foreign_command(text, username.as_deref()) {
            debug!(user_id, "Ignoring command addressed to another bot");
            return Ok(HandlerResponse::Stop);
        }

        if is_escape_command(text, username.as_deref()) {
            if !session.is_idle() {
                info!(user_id, state = ?session.state(), "Flow abandoned by command");
                session.take_flow();
            }
            return Ok(HandlerResponse::Continue);
        }

        let reply = match session.take_flow() {
            ActiveFlow::Idle => return Ok(HandlerResponse::Continue),
            ActiveFlow::Weather(_) => {
                weather::answer_city(&self.gateway.weather, user_id, text, session).await
            }
            ActiveFlow::Finance(state) => {
                finance::answer(self.store.as_ref(), user_id, state, text, session).await?
            }
        };
        info!(user_id, step = ?session.state(), "Flow advanced");
        Ok(HandlerResponse::Reply(reply))
    }
}
