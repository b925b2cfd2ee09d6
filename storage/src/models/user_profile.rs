//! User profile model for persistence.
//!
//! [`UserRow`] maps the `users` table one-to-one; [`UserProfile`] is the typed view callers use.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Number of (label, amount) pairs collected by the expense questionnaire.
pub const EXPENSE_SLOTS: usize = 3;

/// Consent to personal data processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConsentStatus {
    Granted,
    #[default]
    Revoked,
}

impl ConsentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentStatus::Granted => "GRANTED",
            ConsentStatus::Revoked => "REVOKED",
        }
    }
}

impl fmt::Display for ConsentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsentStatus {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GRANTED" => Ok(ConsentStatus::Granted),
            "REVOKED" => Ok(ConsentStatus::Revoked),
            other => Err(StorageError::Database(format!(
                "unknown consent_status: {}",
                other
            ))),
        }
    }
}

/// One expense category with its amount (non-negative).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub label: String,
    pub amount: f64,
}

impl ExpenseCategory {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// One row per chat participant, keyed by telegram id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub telegram_id: i64,
    pub display_name: String,
    pub consent_status: ConsentStatus,
    pub consent_date: Option<DateTime<Utc>>,
    pub revoke_date: Option<DateTime<Utc>>,
    /// Empty until the questionnaire is completed once, then exactly [`EXPENSE_SLOTS`] entries.
    pub expense_categories: Vec<ExpenseCategory>,
}

impl UserProfile {
    pub fn has_consent(&self) -> bool {
        self.consent_status == ConsentStatus::Granted
    }
}

/// What an upsert did to the stored row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileChange {
    Created,
    Updated,
    Unchanged,
}

/// Result of an upsert: the row as stored afterwards plus what changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Upserted {
    pub profile: UserProfile,
    pub change: ProfileChange,
}

/// Raw `users` row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub telegram_id: i64,
    pub display_name: String,
    pub consent_status: String,
    pub consent_date: Option<DateTime<Utc>>,
    pub revoke_date: Option<DateTime<Utc>>,
    pub category1: Option<String>,
    pub category2: Option<String>,
    pub category3: Option<String>,
    pub expenses1: Option<f64>,
    pub expenses2: Option<f64>,
    pub expenses3: Option<f64>,
}

impl TryFrom<UserRow> for UserProfile {
    type Error = StorageError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let consent_status = row.consent_status.parse()?;
        let pairs = [
            (row.category1, row.expenses1),
            (row.category2, row.expenses2),
            (row.category3, row.expenses3),
        ];
        // Columns are written together, so a partial set only appears in hand-edited rows.
        let expense_categories = if pairs.iter().all(|(l, a)| l.is_some() && a.is_some()) {
            pairs
                .into_iter()
                .filter_map(|(label, amount)| Some(ExpenseCategory::new(label?, amount?)))
                .collect()
        } else {
            Vec::new()
        };

        Ok(UserProfile {
            telegram_id: row.telegram_id,
            display_name: row.display_name,
            consent_status,
            consent_date: row.consent_date,
            revoke_date: row.revoke_date,
            expense_categories,
        })
    }
}
