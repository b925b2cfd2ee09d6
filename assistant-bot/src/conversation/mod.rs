//! Conversation state machine: per-user flow state, the finance questionnaire and input validation.

mod finance;
mod session;
mod validate;

pub use finance::{FinanceFlowState, FinanceStep};
pub use session::{ActiveFlow, ConversationSession, FlowState, WeatherFlowState};
pub use validate::{parse_amount, parse_label, ValidationError};
