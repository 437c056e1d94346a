use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_core::models::schedule::{DayWindow, ScheduleConfig, WeeklyTemplate};
use slotbook_core::schedule::{civil_date_in_zone, generate_slots, slot_start_in_zone};

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn config_with_window(day: u8, open: NaiveTime, close: NaiveTime, slot_minutes: u32) -> ScheduleConfig {
    ScheduleConfig {
        week: WeeklyTemplate::from_pairs([(day, Some(DayWindow::new(open, close)))]),
        slot_minutes,
        ..ScheduleConfig::default()
    }
}

// 2025-08-25 is a Monday (day index 1).
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 25).unwrap()
}

#[test]
fn test_closed_day_yields_no_slots() {
    // Template only opens Mondays; a Sunday resolves to a closed day.
    let config = config_with_window(1, time(9, 30), time(19, 0), 30);
    let sunday = NaiveDate::from_ymd_opt(2025, 8, 24).unwrap();

    assert_eq!(generate_slots(sunday, &config), vec![]);
}

#[test]
fn test_monday_template_produces_nineteen_slots() {
    let config = config_with_window(1, time(9, 30), time(19, 0), 30);
    let slots = generate_slots(monday(), &config);

    assert_eq!(slots.len(), 19);
    assert_eq!(slots[0].hhmm(), "09:30");
    assert_eq!(slots[1].hhmm(), "10:00");
    assert_eq!(slots[18].hhmm(), "18:30");
}

#[test]
fn test_slots_are_ascending_and_exactly_one_granularity_apart() {
    let config = config_with_window(1, time(9, 30), time(19, 0), 30);
    let slots = generate_slots(monday(), &config);

    for pair in slots.windows(2) {
        let gap = pair[1].start - pair[0].start;
        assert_eq!(gap.num_minutes(), 30);
        assert!(pair[0].start < pair[1].start);
    }
}

#[rstest]
#[case::hour_window(time(9, 0), time(10, 0), 30, 2)]
#[case::non_divisible_remainder_dropped(time(9, 0), time(10, 15), 30, 2)]
#[case::exactly_one_slot(time(9, 0), time(9, 30), 30, 1)]
#[case::window_shorter_than_granularity(time(9, 0), time(9, 20), 30, 0)]
#[case::empty_window(time(9, 0), time(9, 0), 30, 0)]
#[case::inverted_window(time(19, 0), time(9, 0), 30, 0)]
fn test_slot_count_matches_window(
    #[case] open: NaiveTime,
    #[case] close: NaiveTime,
    #[case] slot_minutes: u32,
    #[case] expected: usize,
) {
    let config = config_with_window(1, open, close, slot_minutes);
    let slots = generate_slots(monday(), &config);

    assert_eq!(slots.len(), expected);

    // Last slot must still fit entirely before close (half-open interval).
    if let Some(last) = slots.last() {
        let end = last.start + chrono::Duration::minutes(i64::from(slot_minutes));
        assert!(end <= close);
    }
}

#[test]
fn test_no_slot_starts_at_or_after_close() {
    let config = config_with_window(1, time(9, 30), time(19, 0), 30);
    let close = time(19, 0);

    for slot in generate_slots(monday(), &config) {
        assert!(slot.start < close);
    }
}

#[test]
fn test_zero_granularity_yields_no_slots() {
    let config = config_with_window(1, time(9, 0), time(17, 0), 0);
    assert_eq!(generate_slots(monday(), &config), vec![]);
}

#[test]
fn test_default_template_matches_deployment_hours() {
    let config = ScheduleConfig::default();

    // Saturday 2025-08-23: 09:00-14:00 at 30 minutes is 10 slots.
    let saturday = NaiveDate::from_ymd_opt(2025, 8, 23).unwrap();
    let slots = generate_slots(saturday, &config);
    assert_eq!(slots.len(), 10);
    assert_eq!(slots[0].hhmm(), "09:00");
    assert_eq!(slots[9].hhmm(), "13:30");

    // Sunday is closed.
    let sunday = NaiveDate::from_ymd_opt(2025, 8, 24).unwrap();
    assert_eq!(generate_slots(sunday, &config), vec![]);
}

#[test]
fn test_civil_date_follows_provider_timezone_not_utc() {
    // 02:00 UTC on Jan 1 is still Dec 31 in Montevideo (UTC-3).
    let instant: DateTime<Utc> = "2025-01-01T02:00:00Z".parse().unwrap();
    let tz = chrono_tz::America::Montevideo;

    assert_eq!(
        civil_date_in_zone(instant, tz),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    );
    // Same instant, different zone, different civil date.
    assert_eq!(
        civil_date_in_zone(instant, chrono_tz::UTC),
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    );
}

#[test]
fn test_slot_start_resolves_to_zone_qualified_instant() {
    let config = config_with_window(1, time(9, 30), time(19, 0), 30);
    let slots = generate_slots(monday(), &config);

    let start = slot_start_in_zone(&slots[0], chrono_tz::America::Montevideo)
        .expect("slot start should exist in zone");
    assert_eq!(start.to_rfc3339(), "2025-08-25T09:30:00-03:00");
}
