//! # dbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Handler`], [`Dispatch`], inbound [`Message`] and
//! outbound [`Reply`] types, errors, and tracing initialization. Transport-agnostic; used by
//! dbot-telegram, handler-chain and the application crate.

pub mod bot;
pub mod error;
pub mod logger;
pub mod reply;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use reply::{InlineButton, Markup, Reply, TextFormat};
pub use types::{
    Chat, Dispatch, Handler, HandlerResponse, Message, MessageDirection, MessageKind, ToCoreMessage,
    ToCoreUser, User,
};
