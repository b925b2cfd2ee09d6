//! # dbot-telegram
//!
//! Telegram transport layer: adapters, [`dbot_core::Bot`] implementation, minimal config, dispatcher runner.
//! Handles only Telegram connectivity; every update is handed to a [`dbot_core::Dispatch`].

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::run_dispatcher;
