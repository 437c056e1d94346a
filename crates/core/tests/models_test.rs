use chrono::{NaiveDate, NaiveTime, Utc, Weekday};
use pretty_assertions::assert_eq;
use serde_json::{from_str, json, to_string, to_value};
use slotbook_core::models::booking::{Booking, CreateBookingRequest, TakenTimesResponse};
use slotbook_core::models::schedule::{DayWindow, ScheduleConfig, Slot, WeeklyTemplate};
use slotbook_core::models::service::default_services;
use uuid::Uuid;

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_weekly_template_deserializes_from_indexed_object() {
    let template: WeeklyTemplate = serde_json::from_value(json!({
        "1": { "open": "09:30", "close": "19:00" },
        "6": { "open": "09:00", "close": "14:00" },
        "0": null
    }))
    .unwrap();

    assert_eq!(
        template.window_for(Weekday::Mon),
        Some(DayWindow::new(time(9, 30), time(19, 0)))
    );
    assert_eq!(
        template.window_for(Weekday::Sat),
        Some(DayWindow::new(time(9, 0), time(14, 0)))
    );
    assert_eq!(template.window_for(Weekday::Sun), None);
    // Days absent from the object are closed too.
    assert_eq!(template.window_for(Weekday::Tue), None);
}

#[test]
fn test_weekly_template_rejects_out_of_range_day_index() {
    let result: Result<WeeklyTemplate, _> = serde_json::from_value(json!({
        "7": { "open": "09:00", "close": "10:00" }
    }));
    assert!(result.is_err());
}

#[test]
fn test_weekly_template_round_trip() {
    let template = WeeklyTemplate::from_pairs([
        (1, Some(DayWindow::new(time(9, 30), time(19, 0)))),
        (0, None),
    ]);

    let json = to_string(&template).unwrap();
    let deserialized: WeeklyTemplate = from_str(&json).unwrap();

    assert_eq!(deserialized, template);
}

#[test]
fn test_day_window_serializes_without_seconds() {
    let window = DayWindow::new(time(9, 30), time(19, 0));
    assert_eq!(
        to_value(window).unwrap(),
        json!({ "open": "09:30", "close": "19:00" })
    );
}

#[test]
fn test_slot_hhmm_is_zero_padded() {
    let slot = Slot {
        date: NaiveDate::from_ymd_opt(2025, 8, 25).unwrap(),
        start: time(9, 5),
    };
    assert_eq!(slot.hhmm(), "09:05");
}

#[test]
fn test_booking_serialization() {
    let booking = Booking {
        slot_key: "2025-08-25#juanma#09:30".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 8, 25).unwrap(),
        time: "09:30".to_string(),
        provider_id: "juanma".to_string(),
        service_id: Some("corte".to_string()),
        name: "Ana".to_string(),
        phone: "+59891234567".to_string(),
        notes: String::new(),
        cancel_token: Uuid::new_v4(),
        created_at: Utc::now(),
    };

    let json = to_string(&booking).unwrap();
    let deserialized: Booking = from_str(&json).unwrap();

    assert_eq!(deserialized.slot_key, booking.slot_key);
    assert_eq!(deserialized.time, booking.time);
    assert_eq!(deserialized.cancel_token, booking.cancel_token);
    assert_eq!(deserialized.created_at, booking.created_at);
}

#[test]
fn test_create_booking_request_tolerates_missing_fields() {
    // Presence is validated by the handler, not the deserializer, so the
    // API can report which field is missing instead of a bare 422.
    let request: CreateBookingRequest = from_str(r#"{"date": "2025-08-25"}"#).unwrap();

    assert_eq!(request.date.as_deref(), Some("2025-08-25"));
    assert_eq!(request.time, None);
    assert_eq!(request.name, None);
}

#[test]
fn test_taken_times_response_shape() {
    let response = TakenTimesResponse {
        ok: true,
        taken: vec!["09:30".to_string(), "10:00".to_string()],
    };
    assert_eq!(
        to_value(&response).unwrap(),
        json!({ "ok": true, "taken": ["09:30", "10:00"] })
    );
}

#[test]
fn test_default_schedule_config() {
    let config = ScheduleConfig::default();

    assert_eq!(config.timezone, chrono_tz::America::Montevideo);
    assert_eq!(config.slot_minutes, 30);
    assert_eq!(config.provider_id, "juanma");
    assert_eq!(
        config.week.window_for(Weekday::Fri),
        Some(DayWindow::new(time(9, 30), time(19, 0)))
    );
    assert_eq!(config.week.window_for(Weekday::Sun), None);
}

#[test]
fn test_default_service_catalogue() {
    let services = default_services();

    assert_eq!(services.len(), 3);
    assert_eq!(services[0].id, "corte");
    assert_eq!(services[0].minutes, 30);
    assert_eq!(services[2].id, "combo");
    assert_eq!(services[2].minutes, 50);
}
