//! Utility functions and helpers
//!
//! This module contains timestamp formatting and other helper functions.

pub mod time;

pub use time::{calendar_date, created_at_query, get_current_user, rfc3339};
