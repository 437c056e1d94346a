//! # Schedule Engine
//!
//! Pure slot generation from the weekly template. No I/O, no shared state;
//! safe to call from any number of concurrent callers.
//!
//! All civil-time reasoning is anchored to the provider's configured
//! timezone. A client in another timezone, or one with a misconfigured
//! device clock, must see exactly the same slot boundaries as the server,
//! so the current instant is converted to the provider's civil date here
//! and the ambient process timezone is never consulted.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::models::schedule::{ScheduleConfig, Slot};

/// Generates every candidate slot for `date` under the given configuration.
///
/// The result is fully materialized, ascending by start time, with starts
/// exactly one granularity apart. Slots cover half-open intervals
/// `[start, start + granularity)`: the last emitted start satisfies
/// `start + granularity <= close`, and a trailing remainder shorter than
/// one granularity is dropped.
///
/// A closed day (no template window), an empty window (`open == close`),
/// an inverted window (`open > close`) and a zero granularity all yield an
/// empty vector, never an error.
pub fn generate_slots(date: NaiveDate, config: &ScheduleConfig) -> Vec<Slot> {
    let Some(window) = config.week.window_for(date.weekday()) else {
        return Vec::new();
    };
    if config.slot_minutes == 0 {
        return Vec::new();
    }

    let window_minutes = (window.close - window.open).num_minutes();
    if window_minutes <= 0 {
        return Vec::new();
    }

    let step = i64::from(config.slot_minutes);
    let count = window_minutes / step;
    (0..count)
        .map(|k| Slot {
            date,
            start: window.open + Duration::minutes(k * step),
        })
        .collect()
}

/// The civil date of `instant` in the given timezone.
pub fn civil_date_in_zone(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's civil date as the provider sees it.
pub fn today_in_zone(tz: Tz) -> NaiveDate {
    civil_date_in_zone(Utc::now(), tz)
}

/// The absolute instant at which a slot starts, in the provider's timezone.
///
/// Returns `None` for wall-clock times that do not exist in the zone on
/// that date (spring-forward DST gaps); ambiguous times resolve to the
/// earlier instant.
pub fn slot_start_in_zone(slot: &Slot, tz: Tz) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&slot.date.and_time(slot.start))
        .earliest()
}
