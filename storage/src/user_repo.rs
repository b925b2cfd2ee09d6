//! User repository: consent, registration and expense persistence.
//!
//! Uses SqlitePoolManager and the models (UserRow, UserProfile). Operations on the same telegram id
//! are serialized through a per-key async lock; different ids never wait on each other.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info, instrument};

use crate::error::StorageError;
use crate::models::{
    ConsentStatus, ExpenseCategory, ProfileChange, Upserted, UserProfile, UserRow, EXPENSE_SLOTS,
};
use crate::repository::UserStore;
use crate::sqlite_pool::SqlitePoolManager;

const SELECT_USER: &str = r#"
    SELECT telegram_id, display_name, consent_status, consent_date, revoke_date,
           category1, category2, category3, expenses1, expenses2, expenses3
    FROM users WHERE telegram_id = ?
"#;

/// Holds one key's lock; on drop releases it and prunes the map entry once nobody else holds or
/// waits on it, so a cancelled operation cannot leave the entry behind.
pub(crate) struct KeyLock {
    telegram_id: i64,
    locks: Arc<DashMap<i64, Arc<Mutex<()>>>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for KeyLock {
    fn drop(&mut self) {
        drop(self.guard.take());
        self.locks
            .remove_if(&self.telegram_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

#[derive(Clone)]
pub struct SqliteUserStore {
    pool_manager: SqlitePoolManager,
    key_locks: Arc<DashMap<i64, Arc<Mutex<()>>>>,
}

impl SqliteUserStore {
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let store = Self {
            pool_manager,
            key_locks: Arc::new(DashMap::new()),
        };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating users table if not exists");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                telegram_id INTEGER PRIMARY KEY,
                display_name TEXT NOT NULL,
                consent_status TEXT NOT NULL DEFAULT 'REVOKED',
                consent_date TEXT,
                revoke_date TEXT,
                category1 TEXT,
                category2 TEXT,
                category3 TEXT,
                expenses1 REAL,
                expenses2 REAL,
                expenses3 REAL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;

        info!("Users table ready");
        Ok(())
    }

    pub(crate) async fn lock_key(&self, telegram_id: i64) -> KeyLock {
        let lock = self.key_locks.entry(telegram_id).or_default().clone();
        let guard = lock.lock_owned().await;
        KeyLock {
            telegram_id,
            locks: self.key_locks.clone(),
            guard: Some(guard),
        }
    }

    /// Number of ids with a live lock entry.
    #[cfg(test)]
    pub(crate) fn locked_keys(&self) -> usize {
        self.key_locks.len()
    }

    async fn fetch(&self, telegram_id: i64) -> Result<Option<UserProfile>, StorageError> {
        let row: Option<UserRow> = sqlx::query_as(SELECT_USER)
            .bind(telegram_id)
            .fetch_optional(self.pool_manager.pool())
            .await?;
        row.map(UserProfile::try_from).transpose()
    }

    async fn fetch_existing(&self, telegram_id: i64) -> Result<UserProfile, StorageError> {
        self.fetch(telegram_id)
            .await?
            .ok_or(StorageError::NotFound(telegram_id))
    }

    async fn upsert_consent_locked(
        &self,
        telegram_id: i64,
        display_name: &str,
        status: ConsentStatus,
    ) -> Result<Upserted, StorageError> {
        let pool = self.pool_manager.pool();
        let now = Utc::now();

        match self.fetch(telegram_id).await? {
            None => {
                let (consent_date, revoke_date) = match status {
                    ConsentStatus::Granted => (Some(now), None),
                    ConsentStatus::Revoked => (None, Some(now)),
                };
                sqlx::query(
                    r#"
                    INSERT INTO users (telegram_id, display_name, consent_status, consent_date, revoke_date)
                    VALUES (?, ?, ?, ?, ?)
                    "#,
                )
                .bind(telegram_id)
                .bind(display_name)
                .bind(status.as_str())
                .bind(consent_date)
                .bind(revoke_date)
                .execute(pool)
                .await?;

                info!(telegram_id, status = %status, "Created profile with consent status");
                Ok(Upserted {
                    profile: self.fetch_existing(telegram_id).await?,
                    change: ProfileChange::Created,
                })
            }
            Some(profile) if profile.consent_status == status => {
                debug!(telegram_id, status = %status, "Consent status unchanged");
                Ok(Upserted {
                    profile,
                    change: ProfileChange::Unchanged,
                })
            }
            Some(_) => {
                let sql = match status {
                    ConsentStatus::Granted => {
                        "UPDATE users SET consent_status = ?, consent_date = ? WHERE telegram_id = ?"
                    }
                    ConsentStatus::Revoked => {
                        "UPDATE users SET consent_status = ?, revoke_date = ? WHERE telegram_id = ?"
                    }
                };
                sqlx::query(sql)
                    .bind(status.as_str())
                    .bind(now)
                    .bind(telegram_id)
                    .execute(pool)
                    .await?;

                info!(telegram_id, status = %status, "Updated consent status");
                Ok(Upserted {
                    profile: self.fetch_existing(telegram_id).await?,
                    change: ProfileChange::Updated,
                })
            }
        }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn get_profile(&self, telegram_id: i64) -> Result<Option<UserProfile>, StorageError> {
        self.fetch(telegram_id).await
    }

    #[instrument(skip(self, display_name))]
    async fn upsert_consent(
        &self,
        telegram_id: i64,
        display_name: &str,
        status: ConsentStatus,
    ) -> Result<Upserted, StorageError> {
        let _lock = self.lock_key(telegram_id).await;
        self.upsert_consent_locked(telegram_id, display_name, status)
            .await
    }

    #[instrument(skip(self, display_name))]
    async fn register(
        &self,
        telegram_id: i64,
        display_name: &str,
    ) -> Result<Upserted, StorageError> {
        let _lock = self.lock_key(telegram_id).await;
        let inserted = sqlx::query(
            r#"
            INSERT INTO users (telegram_id, display_name) VALUES (?, ?)
            ON CONFLICT(telegram_id) DO NOTHING
            "#,
        )
        .bind(telegram_id)
        .bind(display_name)
        .execute(self.pool_manager.pool())
        .await?
        .rows_affected();

        let change = if inserted == 1 {
            info!(telegram_id, "Registered new profile");
            ProfileChange::Created
        } else {
            ProfileChange::Unchanged
        };
        Ok(Upserted {
            profile: self.fetch_existing(telegram_id).await?,
            change,
        })
    }

    #[instrument(skip(self, categories))]
    async fn save_expenses(
        &self,
        telegram_id: i64,
        categories: &[ExpenseCategory; EXPENSE_SLOTS],
    ) -> Result<UserProfile, StorageError> {
        let _lock = self.lock_key(telegram_id).await;
        let [c1, c2, c3] = categories;
        let updated = sqlx::query(
            r#"
            UPDATE users
            SET category1 = ?, expenses1 = ?,
                category2 = ?, expenses2 = ?,
                category3 = ?, expenses3 = ?
            WHERE telegram_id = ? AND consent_status = 'GRANTED'
            "#,
        )
        .bind(&c1.label)
        .bind(c1.amount)
        .bind(&c2.label)
        .bind(c2.amount)
        .bind(&c3.label)
        .bind(c3.amount)
        .bind(telegram_id)
        .execute(self.pool_manager.pool())
        .await?
        .rows_affected();

        if updated == 0 {
            return match self.fetch(telegram_id).await? {
                None => Err(StorageError::NotFound(telegram_id)),
                Some(_) => Err(StorageError::ConsentRequired(telegram_id)),
            };
        }

        info!(telegram_id, "Saved expense categories");
        self.fetch_existing(telegram_id).await
    }
}
