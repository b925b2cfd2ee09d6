//! Storage crate: user profile persistence behind the [`UserStore`] abstraction.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – UserProfile, ConsentStatus, ExpenseCategory, Upserted
//! - [`repository`] – UserStore trait
//! - [`user_repo`] – SqliteUserStore (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod models;
mod repository;
mod sqlite_pool;
mod user_repo;


pub use error::StorageError;
pub use models::{
    ConsentStatus, ExpenseCategory, ProfileChange, Upserted, UserProfile, UserRow, EXPENSE_SLOTS,
};
pub use repository::UserStore;
pub use sqlite_pool::SqlitePoolManager;
pub use user_repo::SqliteUserStore;
