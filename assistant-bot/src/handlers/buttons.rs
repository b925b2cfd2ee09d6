//! Reply-keyboard buttons, matched by exact label.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use gateway::Gateway;
use storage::UserStore;

use crate::conversation::ConversationSession;
use crate::features::{consent, finance, menus, savings};
use crate::texts;

pub struct ButtonHandler {
    store: Arc<dyn UserStore>,
    gateway: Gateway,
}

impl ButtonHandler {
    pub fn new(store: Arc<dyn UserStore>, gateway: Gateway) -> Self {
        Self { store, gateway }
    }
}

#[async_trait]
impl Handler<ConversationSession> for ButtonHandler {
    async fn handle(
        &self,
        message: &Message,
        session: &mut ConversationSession,
    ) -> Result<HandlerResponse> {
        let Some(text) = message.text() else {
            return Ok(HandlerResponse::Continue);
        };
        let store = self.store.as_ref();
        let user = &message.user;

        let reply = match text {
            texts::BTN_CONSENT => consent::grant(store, user).await?,
            texts::BTN_REVOKE => consent::revoke(store, user).await?,
            texts::BTN_REGISTER => consent::register(store, user).await?,
            texts::BTN_RATES => savings::rates(&self.gateway.rates).await,
            texts::BTN_TIPS => savings::tip(),
            texts::BTN_FINANCES => finance::start(store, user.id, session).await?,
            texts::BTN_HELLO => menus::greet(user, true),
            texts::BTN_BYE => menus::greet(user, false),
            _ => return Ok(HandlerResponse::Continue),
        };
        Ok(HandlerResponse::Reply(reply))
    }
}
