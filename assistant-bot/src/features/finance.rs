//! Personal finance questionnaire: start gate and step replies.

use dbot_core::{Reply, Result};
use storage::{ExpenseCategory, UserStore, EXPENSE_SLOTS};
use tracing::{info, warn};

use super::persistence;
use crate::conversation::{ActiveFlow, ConversationSession, FinanceFlowState, FinanceStep, ValidationError};
use crate::texts;

/// Starts the questionnaire when the user has granted consent; otherwise the session stays as is.
pub async fn start(
    store: &dyn UserStore,
    user_id: i64,
    session: &mut ConversationSession,
) -> Result<Reply> {
    let profile = store.get_profile(user_id).await.map_err(persistence)?;
    if !profile.is_some_and(|p| p.has_consent()) {
        info!(user_id, "Finance flow refused, consent missing");
        return Ok(Reply::text(texts::CONSENT_REQUIRED));
    }

    session.start_finance();
    Ok(Reply::text(texts::ASK_CATEGORY[0]))
}

/// Feeds one input to the questionnaire. The flow was taken out of `session`; it is put back unless
/// the questionnaire completes.
pub async fn answer(
    store: &dyn UserStore,
    user_id: i64,
    state: FinanceFlowState,
    input: &str,
    session: &mut ConversationSession,
) -> Result<Reply> {
    match state.step(input) {
        FinanceStep::Next(next) => {
            let prompt = next.prompt();
            session.flow = ActiveFlow::Finance(next);
            Ok(Reply::text(prompt))
        }
        FinanceStep::Rejected(same, err) => {
            info!(user_id, slot = same.slot(), error = %err, "Finance input rejected");
            let text = match (&same, &err) {
                (FinanceFlowState::AwaitingCategory { .. }, _) => texts::EMPTY_CATEGORY,
                (_, ValidationError::Negative(_)) => texts::NEGATIVE_AMOUNT,
                _ => texts::BAD_AMOUNT,
            };
            session.flow = ActiveFlow::Finance(same);
            Ok(Reply::text(text))
        }
        FinanceStep::Complete(categories) => match store.save_expenses(user_id, &categories).await {
            Ok(_) => {
                info!(user_id, "Finance questionnaire completed");
                Ok(Reply::text(summary(&categories)))
            }
            Err(e) if e.is_precondition() => {
                warn!(user_id, error = %e, "Expenses not saved, precondition failed");
                Ok(Reply::text(texts::CONSENT_REQUIRED))
            }
            Err(e) => Err(persistence(e)),
        },
    }
}

pub fn summary(categories: &[ExpenseCategory; EXPENSE_SLOTS]) -> String {
    let mut text = String::from("✅ Отлично! Ваши данные сохранены:\n");
    for (i, category) in categories.iter().enumerate() {
        text.push_str(&format!(
            "\n{}. {}: {} ₽",
            i + 1,
            category.label,
            texts::format_decimal(category.amount)
        ));
    }
    text
}
