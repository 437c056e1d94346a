//! Canonical slot identity.
//!
//! A booking is keyed by `date#provider#HH:MM`. The time component must be
//! normalized identically on every path that touches the key, otherwise two
//! spellings of the same wall-clock time ("9:30" vs "09:30") would defeat
//! the uniqueness guard. Normalization here is strict: parse one of the
//! accepted formats, then reformat; anything else is a validation error.

use chrono::{NaiveDate, NaiveTime};

use crate::errors::{BookingError, BookingResult};

/// Time formats accepted from clients, tried in order.
const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S"];

/// Normalizes a client-supplied wall-clock time to canonical 24-hour `HH:MM`.
///
/// Accepts `H:MM`, `HH:MM` and `HH:MM:SS`; rejects everything else.
pub fn normalize_time(raw: &str) -> BookingResult<String> {
    let trimmed = raw.trim();
    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(trimmed, format) {
            return Ok(time.format("%H:%M").to_string());
        }
    }
    Err(BookingError::Validation(format!(
        "Invalid time '{raw}', expected HH:MM"
    )))
}

/// Derives the canonical booking key for a (date, provider, time) triple.
///
/// `time` must already be in canonical `HH:MM` form; callers normalize
/// client input with [`normalize_time`] first.
pub fn slot_key(date: NaiveDate, provider_id: &str, time: &str) -> String {
    format!("{}#{}#{}", date.format("%Y-%m-%d"), provider_id, time)
}

/// Parses a client-supplied civil date in `YYYY-MM-DD` form.
pub fn parse_date(raw: &str) -> BookingResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| BookingError::Validation(format!("Invalid date '{raw}', expected YYYY-MM-DD")))
}
