//! Chain handlers, in the order [`crate::build_handler_chain`] registers them.

mod actions;
mod buttons;
mod commands;
mod fallback;
mod flow;
mod logging;

pub use actions::ActionHandler;
pub use buttons::ButtonHandler;
pub use commands::{is_escape_command, is_foreign_command, Command, CommandHandler};
pub use fallback::FallbackHandler;
pub use flow::FlowHandler;
pub use logging::LoggingHandler;
