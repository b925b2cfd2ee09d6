//! # Handler chain
//!
//! Runs a sequence of handlers for each message against the sender's session. All `before` run in
//! order (any false stops the chain); the first handler that returns Stop or Reply ends handler
//! execution; `after` callbacks run in reverse order.
//!
//! [`MessageRouter`] wraps a chain with a [`SessionStore`] and a [`dbot_core::Bot`]: it serializes
//! messages per user, turns handler errors into a failure reply plus a session reset, and delivers
//! the reply.

mod router;
mod session;

pub use router::MessageRouter;
pub use session::{Session, SessionStore};

use dbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Chain of handlers sharing one session type `S`.
pub struct HandlerChain<S> {
    handlers: Vec<Arc<dyn Handler<S>>>,
}

impl<S> Clone for HandlerChain<S> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<S: Send + Sync> Default for HandlerChain<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Send + Sync> HandlerChain<S> {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler (runs in order; first Stop/Reply ends handler phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler<S>>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs before, then handle until Stop/Reply, then after in reverse. Returns first Stop or Reply, or Continue.
    #[instrument(skip(self, message, session))]
    pub async fn handle(&self, message: &Message, session: &mut S) -> Result<HandlerResponse> {
        let mut final_response = HandlerResponse::Continue;

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain started"
        );

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            if !handler.before(message, session).await? {
                info!(
                    user_id = message.user.id,
                    handler = %handler_name,
                    "step: handler before returned false, chain stopped"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(message, session).await?;
            debug!(
                handler = %handler_name,
                response = ?response,
                "Handler processed"
            );

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    let reply_len = match &response {
                        HandlerResponse::Reply(reply) => Some(reply.text.len()),
                        _ => None,
                    };
                    info!(
                        user_id = message.user.id,
                        handler = %handler_name,
                        reply_len = ?reply_len,
                        "step: handler chain stopped by handler"
                    );
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
            }
        }

        for handler in self.handlers.iter().rev() {
            handler.after(message, &final_response).await?;
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handler_chain finished"
        );

        Ok(final_response)
    }
}

// Chain tests live in tests/handler_chain_test.rs, router tests in tests/router_test.rs
