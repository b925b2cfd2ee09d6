//! Consent and registration buttons.

use dbot_core::{Reply, Result, User};
use storage::{ConsentStatus, ProfileChange, UserStore};
use tracing::info;

use super::{display_name, persistence};
use crate::texts;

pub async fn grant(store: &dyn UserStore, user: &User) -> Result<Reply> {
    let upserted = store
        .upsert_consent(user.id, &display_name(user), ConsentStatus::Granted)
        .await
        .map_err(persistence)?;

    let text = match upserted.change {
        ProfileChange::Created => texts::CONSENT_CREATED.to_string(),
        ProfileChange::Updated => texts::CONSENT_GRANTED.to_string(),
        ProfileChange::Unchanged => texts::consent_already_granted(upserted.profile.consent_date),
    };
    Ok(Reply::text(text))
}

/// Revokes consent of a registered user. Unknown users get a notice and no profile is created.
pub async fn revoke(store: &dyn UserStore, user: &User) -> Result<Reply> {
    let Some(profile) = store.get_profile(user.id).await.map_err(persistence)? else {
        info!(user_id = user.id, "Revoke from unregistered user");
        return Ok(Reply::text(texts::NOT_REGISTERED));
    };

    if !profile.has_consent() {
        let text = match profile.revoke_date {
            Some(date) => texts::consent_already_revoked(date),
            None => texts::CONSENT_NEVER_GIVEN.to_string(),
        };
        return Ok(Reply::text(text));
    }

    store
        .upsert_consent(user.id, &display_name(user), ConsentStatus::Revoked)
        .await
        .map_err(persistence)?;
    Ok(Reply::text(texts::CONSENT_REVOKED))
}

pub async fn register(store: &dyn UserStore, user: &User) -> Result<Reply> {
    let upserted = store
        .register(user.id, &display_name(user))
        .await
        .map_err(persistence)?;

    let text = match upserted.change {
        ProfileChange::Created => texts::REGISTERED_NO_CONSENT,
        _ if upserted.profile.has_consent() => texts::ALREADY_REGISTERED_WITH_CONSENT,
        _ => texts::ALREADY_REGISTERED_NO_CONSENT,
    };
    Ok(Reply::text(text))
}
