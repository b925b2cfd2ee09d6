//! Reply builders for each feature. Handlers decide what runs; these build what is said.

pub mod consent;
pub mod finance;
pub mod fun;
pub mod menus;
pub mod savings;
pub mod weather;

use dbot_core::DbotError;
use storage::StorageError;

/// Display name stored with a profile.
pub(crate) fn display_name(user: &dbot_core::User) -> String {
    user.full_name()
        .unwrap_or_else(|| crate::texts::ANONYMOUS_NAME.to_string())
}

pub(crate) fn persistence(err: StorageError) -> DbotError {
    DbotError::Persistence(err.to_string())
}
