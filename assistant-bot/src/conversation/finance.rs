//! Three-step expense questionnaire: (category, amount) × 3.

use storage::{ExpenseCategory, EXPENSE_SLOTS};

use super::validate::{parse_amount, parse_label, ValidationError};
use crate::texts;

/// Where the questionnaire is. `collected` always holds fewer than [`EXPENSE_SLOTS`] pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum FinanceFlowState {
    AwaitingCategory {
        collected: Vec<ExpenseCategory>,
    },
    AwaitingAmount {
        collected: Vec<ExpenseCategory>,
        label: String,
    },
}

/// Outcome of feeding one input to the questionnaire.
#[derive(Debug, Clone, PartialEq)]
pub enum FinanceStep {
    /// Input accepted; continue in the new state.
    Next(FinanceFlowState),
    /// Input rejected; the state is unchanged.
    Rejected(FinanceFlowState, ValidationError),
    /// Last amount accepted; all pairs collected.
    Complete([ExpenseCategory; EXPENSE_SLOTS]),
}

impl Default for FinanceFlowState {
    fn default() -> Self {
        Self::start()
    }
}

impl FinanceFlowState {
    pub fn start() -> Self {
        FinanceFlowState::AwaitingCategory {
            collected: Vec::new(),
        }
    }

    /// 1-based index of the pair being collected.
    pub fn slot(&self) -> u8 {
        let collected = match self {
            FinanceFlowState::AwaitingCategory { collected } => collected,
            FinanceFlowState::AwaitingAmount { collected, .. } => collected,
        };
        collected.len() as u8 + 1
    }

    /// Question to ask for this state.
    pub fn prompt(&self) -> &'static str {
        match self {
            FinanceFlowState::AwaitingCategory { collected } => texts::ASK_CATEGORY
                .get(collected.len())
                .copied()
                .unwrap_or(texts::ASK_AMOUNT),
            FinanceFlowState::AwaitingAmount { .. } => texts::ASK_AMOUNT,
        }
    }

    pub fn step(self, input: &str) -> FinanceStep {
        match self {
            FinanceFlowState::AwaitingCategory { collected } => match parse_label(input) {
                Ok(label) => FinanceStep::Next(FinanceFlowState::AwaitingAmount { collected, label }),
                Err(e) => FinanceStep::Rejected(FinanceFlowState::AwaitingCategory { collected }, e),
            },
            FinanceFlowState::AwaitingAmount {
                mut collected,
                label,
            } => match parse_amount(input) {
                Ok(amount) => {
                    collected.push(ExpenseCategory::new(label, amount));
                    match <[ExpenseCategory; EXPENSE_SLOTS]>::try_from(collected) {
                        Ok(all) => FinanceStep::Complete(all),
                        Err(collected) => {
                            FinanceStep::Next(FinanceFlowState::AwaitingCategory { collected })
                        }
                    }
                }
                Err(e) => {
                    FinanceStep::Rejected(FinanceFlowState::AwaitingAmount { collected, label }, e)
                }
            },
        }
    }
}
