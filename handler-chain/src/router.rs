//! Dispatch boundary: session slot, chain, error recovery, reply delivery.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Dispatch, HandlerResponse, Message, Reply, Result};
use tracing::{error, info, instrument};

use crate::session::{Session, SessionStore};
use crate::HandlerChain;

const DEFAULT_FAILURE_REPLY: &str = "Something went wrong. Please try again.";

/// Routes each inbound message through the chain with the sender's session locked.
///
/// A chain error never reaches the transport: it is logged, the session is reset to its default
/// and the failure reply is sent instead. The session stays locked until the reply is delivered,
/// so a user's next message always sees the state this one left behind.
pub struct MessageRouter<S: Session> {
    chain: HandlerChain<S>,
    sessions: Arc<SessionStore<S>>,
    bot: Arc<dyn Bot>,
    failure_reply: Reply,
}

impl<S: Session> MessageRouter<S> {
    pub fn new(chain: HandlerChain<S>, bot: Arc<dyn Bot>) -> Self {
        Self {
            chain,
            sessions: Arc::new(SessionStore::new()),
            bot,
            failure_reply: Reply::text(DEFAULT_FAILURE_REPLY),
        }
    }

    /// Reply sent when the chain fails.
    pub fn with_failure_reply(mut self, reply: Reply) -> Self {
        self.failure_reply = reply;
        self
    }

    pub fn sessions(&self) -> Arc<SessionStore<S>> {
        self.sessions.clone()
    }

    /// Copy of the user's session.
    pub async fn snapshot(&self, user_id: i64) -> S
    where
        S: Clone,
    {
        self.sessions.snapshot(user_id).await
    }
}

#[async_trait]
impl<S: Session> Dispatch for MessageRouter<S> {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn dispatch(&self, message: &Message) -> Result<HandlerResponse> {
        let user_id = message.user.id;
        let mut session = self.sessions.acquire(user_id).await;

        let response = match self.chain.handle(message, &mut session).await {
            Ok(response) => response,
            Err(e) => {
                error!(user_id, error = %e, "step: handler chain failed, session reset");
                session.reset();
                HandlerResponse::Reply(self.failure_reply.clone())
            }
        };

        if let HandlerResponse::Reply(reply) = &response {
            match self.bot.send_reply(&message.chat, reply).await {
                Ok(()) => info!(user_id, chat_id = message.chat.id, "step: reply sent"),
                Err(e) => error!(user_id, error = %e, "Failed to send reply"),
            }
        }

        self.sessions.release(user_id, session);
        Ok(response)
    }
}
