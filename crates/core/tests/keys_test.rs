use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotbook_core::errors::BookingError;
use slotbook_core::keys::{normalize_time, parse_date, slot_key};

#[rstest]
#[case("09:30", "09:30")]
#[case("9:30", "09:30")]
#[case("09:30:00", "09:30")]
#[case("18:05:59", "18:05")]
#[case(" 09:30 ", "09:30")]
#[case("00:00", "00:00")]
#[case("23:59", "23:59")]
fn test_normalize_time_accepts_and_canonicalizes(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(normalize_time(raw).unwrap(), expected);
}

#[rstest]
#[case("25:00")]
#[case("09:60")]
#[case("9.30")]
#[case("930")]
#[case("09-30")]
#[case("")]
#[case("mediodía")]
fn test_normalize_time_rejects_malformed_input(#[case] raw: &str) {
    let err = normalize_time(raw).unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
}

#[test]
fn test_slot_key_is_deterministic_delimited_triple() {
    let date = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
    assert_eq!(slot_key(date, "juanma", "09:30"), "2025-08-25#juanma#09:30");
}

#[test]
fn test_equivalent_time_spellings_share_a_key() {
    let date = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
    let a = slot_key(date, "juanma", &normalize_time("9:30").unwrap());
    let b = slot_key(date, "juanma", &normalize_time("09:30:00").unwrap());
    assert_eq!(a, b);
}

#[test]
fn test_parse_date() {
    assert_eq!(
        parse_date("2025-08-25").unwrap(),
        NaiveDate::from_ymd_opt(2025, 8, 25).unwrap()
    );
    assert!(matches!(
        parse_date("25/08/2025").unwrap_err(),
        BookingError::Validation(_)
    ));
    assert!(matches!(
        parse_date("2025-13-01").unwrap_err(),
        BookingError::Validation(_)
    ));
}
