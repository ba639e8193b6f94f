//! Time, query-string and actor helpers

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, Utc};

/// Format a timestamp as RFC3339 (seconds precision, `Z` suffix)
pub fn rfc3339(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Build the `created_at` query value for an event listing
///
/// The timestamp is rendered as RFC3339 and then query-escaped, so `:` and
/// `+` survive the trip through the URL.
pub fn created_at_query(t: DateTime<Utc>) -> String {
    urlencoding::encode(&rfc3339(t)).into_owned()
}

/// Render a calendar date as `YYYY-MM-D` (month padded, day not)
pub fn calendar_date(date: NaiveDate) -> String {
    format!("{}-{:02}-{}", date.year(), date.month(), date.day())
}

/// Get current user from the OS environment
pub fn get_current_user() -> String {
    std::env::var("USER") // Linux/Mac
        .or_else(|_| std::env::var("USERNAME")) // Windows
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "anonymous".to_string())
}
