//! Logs each inbound message in before() and the outcome in after(); never stops the chain.
//! Message text carries expense labels and amounts, so it is only logged at debug.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

use crate::conversation::ConversationSession;

pub struct LoggingHandler;

#[async_trait]
impl Handler<ConversationSession> for LoggingHandler {
    #[instrument(skip(self, message, session))]
    async fn before(&self, message: &Message, session: &ConversationSession) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            kind = ?message.kind,
            state = ?session.state(),
            "Received message"
        );
        debug!(user_id = message.user.id, content = %message.content, "Message content");
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let outcome = match response {
            HandlerResponse::Reply(_) => "reply",
            HandlerResponse::Stop => "stop",
            HandlerResponse::Continue | HandlerResponse::Ignore => "unhandled",
        };
        debug!(user_id = message.user.id, message_id = %message.id, outcome, "Processed message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use chrono::Utc;
    use dbot_core::{Chat, MessageDirection, MessageKind, User};
    use tracing::Level;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn message(content: &str) -> Message {
        Message {
            id: "1".to_string(),
            user: User {
                id: 42,
                username: Some("ann".to_string()),
                first_name: None,
                last_name: None,
            },
            chat: Chat {
                id: 42,
                chat_type: "private".to_string(),
            },
            content: content.to_string(),
            kind: MessageKind::Text,
            direction: MessageDirection::Incoming,
            created_at: Utc::now(),
        }
    }

    async fn log_at(level: Level, content: &str) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _default = tracing::subscriber::set_default(subscriber);

        let handled = LoggingHandler
            .before(&message(content), &ConversationSession::default())
            .await
            .unwrap();
        assert!(handled);
        captured.text()
    }

    /// **Test: Typed text stays out of info logs.**
    ///
    /// **Setup:** Subscriber capped at INFO writing to a buffer.
    /// **Action:** before() on an expense answer.
    /// **Expected:** The arrival is logged; the label and amount are not.
    #[tokio::test]
    async fn test_content_not_logged_at_info() {
        let output = log_at(Level::INFO, "Еда 73519").await;

        assert!(output.contains("Received message"));
        assert!(!output.contains("73519"));
        assert!(!output.contains("Еда"));
    }

    /// **Test: Content is still available at debug.**
    #[tokio::test]
    async fn test_content_logged_at_debug() {
        let output = log_at(Level::DEBUG, "Еда 73519").await;

        assert!(output.contains("Еда 73519"));
    }
}
