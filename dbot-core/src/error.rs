use thiserror::Error;

/// Error type of handlers and transports. The router turns any of these into a failure reply.
#[derive(Error, Debug)]
pub enum DbotError {
    /// The user store is unavailable or rejected a write.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// The transport failed to deliver or edit a message.
    #[error("Bot error: {0}")]
    Bot(String),
}

pub type Result<T> = std::result::Result<T, DbotError>;
