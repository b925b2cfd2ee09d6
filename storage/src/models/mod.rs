mod user_profile;

pub use user_profile::{
    ConsentStatus, ExpenseCategory, ProfileChange, Upserted, UserProfile, UserRow, EXPENSE_SLOTS,
};
