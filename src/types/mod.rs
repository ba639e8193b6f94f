//! Data types for the record client
//!
//! This module contains the user record and audit event structures exchanged
//! with the Record Service.

mod event;
mod user;

pub use event::{build_event, Event, Snapshot, ACTION_USER_ROLLBACK, ACTION_USER_UPDATE};
pub use user::{Backpack, User};

/// Check if value is zero (for skip_serializing_if)
pub fn is_zero(val: &i64) -> bool {
    *val == 0
}

/// Check if flag is unset (for skip_serializing_if)
pub fn is_false(val: &bool) -> bool {
    !*val
}
