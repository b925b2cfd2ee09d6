//! # Assistant bot
//!
//! Telegram assistant combining a weather lookup, light content commands (facts, jokes, cats,
//! Pokémon, activity ideas) and a personal finance section with consent tracking and a
//! three-category expense questionnaire.
//!
//! Wires handler-chain, dbot-telegram, storage and gateway. The conversation state machine lives in
//! [`conversation`]; each feature's replies in [`features`]; routing in [`handlers`].

pub mod cli;
pub mod components;
pub mod config;
pub mod conversation;
pub mod features;
pub mod handlers;
pub mod keyboards;
pub mod runner;
pub mod texts;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, build_router, AppServices, BotComponents};
pub use config::BotConfig;
pub use conversation::{ActiveFlow, ConversationSession, FlowState};
pub use runner::run_bot;
