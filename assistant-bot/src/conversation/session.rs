//! Per-user conversation session.

use handler_chain::Session;

use super::finance::FinanceFlowState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherFlowState {
    AwaitingCity,
}

/// The flow a user is in, with its collected data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActiveFlow {
    #[default]
    Idle,
    Weather(WeatherFlowState),
    Finance(FinanceFlowState),
}

/// Observable state of a session; `AwaitingCategory(n)` / `AwaitingAmount(n)` carry the 1-based pair index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    AwaitingCity,
    AwaitingCategory(u8),
    AwaitingAmount(u8),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationSession {
    pub flow: ActiveFlow,
}

impl ConversationSession {
    pub fn state(&self) -> FlowState {
        match &self.flow {
            ActiveFlow::Idle => FlowState::Idle,
            ActiveFlow::Weather(WeatherFlowState::AwaitingCity) => FlowState::AwaitingCity,
            ActiveFlow::Finance(finance @ FinanceFlowState::AwaitingCategory { .. }) => {
                FlowState::AwaitingCategory(finance.slot())
            }
            ActiveFlow::Finance(finance @ FinanceFlowState::AwaitingAmount { .. }) => {
                FlowState::AwaitingAmount(finance.slot())
            }
        }
    }

    /// Starts the weather flow, replacing any active flow.
    pub fn start_weather(&mut self) {
        self.flow = ActiveFlow::Weather(WeatherFlowState::AwaitingCity);
    }

    /// Starts the finance questionnaire, replacing any active flow.
    pub fn start_finance(&mut self) {
        self.flow = ActiveFlow::Finance(FinanceFlowState::start());
    }

    /// Takes the active flow out, leaving the session idle.
    pub fn take_flow(&mut self) -> ActiveFlow {
        std::mem::take(&mut self.flow)
    }
}

impl Session for ConversationSession {
    fn is_idle(&self) -> bool {
        matches!(self.flow, ActiveFlow::Idle)
    }
}
