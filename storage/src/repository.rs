//! Store abstraction over user profiles. [`crate::SqliteUserStore`] is the production implementation;
//! tests substitute failing or recording stores.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{ConsentStatus, ExpenseCategory, Upserted, UserProfile, EXPENSE_SLOTS};

/// Keyed store of [`UserProfile`]s. Every operation is one atomic read-modify-write on a single key.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns the profile, or `None` if the user never registered.
    async fn get_profile(&self, telegram_id: i64) -> Result<Option<UserProfile>, StorageError>;

    /// Creates the profile with `status` if absent; otherwise switches status and stamps the matching
    /// date. Repeating the stored status returns the row untouched with [`crate::ProfileChange::Unchanged`].
    async fn upsert_consent(
        &self,
        telegram_id: i64,
        display_name: &str,
        status: ConsentStatus,
    ) -> Result<Upserted, StorageError>;

    /// Creates the profile with revoked consent if absent; no-op otherwise.
    async fn register(&self, telegram_id: i64, display_name: &str)
        -> Result<Upserted, StorageError>;

    /// Overwrites all expense pairs. Fails with [`StorageError::NotFound`] or
    /// [`StorageError::ConsentRequired`] without writing when the precondition does not hold.
    async fn save_expenses(
        &self,
        telegram_id: i64,
        categories: &[ExpenseCategory; EXPENSE_SLOTS],
    ) -> Result<UserProfile, StorageError>;
}
