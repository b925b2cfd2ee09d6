//! Storage error types.
//!
//! Used by [`crate::UserStore`] implementations and their callers.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The database is unavailable, a statement failed, or a row could not be decoded.
    #[error("Database error: {0}")]
    Database(String),
    /// No profile exists for the given telegram id.
    #[error("Not found: user {0}")]
    NotFound(i64),
    /// The operation needs a profile whose consent is granted.
    #[error("Consent required: user {0}")]
    ConsentRequired(i64),
}

impl StorageError {
    /// True for errors caused by the caller skipping a required step (registration, consent)
    /// rather than by the store itself.
    pub fn is_precondition(&self) -> bool {
        matches!(self, StorageError::NotFound(_) | StorageError::ConsentRequired(_))
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Database(err.to_string())
    }
}
