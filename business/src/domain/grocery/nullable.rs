//! Mapping of optional inputs onto nullable columns.
//!
//! Every write path goes through these two functions so that "no value" is
//! always stored as NULL.

use chrono::{DateTime, NaiveDate, Utc};

/// Maps a text input to its column value. The empty string is stored as NULL.
pub fn nullable_text(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    Some(raw.to_string())
}

/// Maps a timestamp input to its column value. Missing and zero instants are
/// stored as NULL.
pub fn nullable_timestamp(raw: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    raw.filter(|instant| !is_zero_instant(instant))
}

/// `0001-01-01T00:00:00Z`, the value clients send for an unset time.
pub fn is_zero_instant(instant: &DateTime<Utc>) -> bool {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .is_some_and(|zero| instant.naive_utc() == zero)
}
