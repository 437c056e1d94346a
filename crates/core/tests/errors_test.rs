use std::error::Error;
use slotbook_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let not_found = BookingError::NotFound("No booking matches token".to_string());
    let validation = BookingError::Validation("Missing fields".to_string());
    let conflict = BookingError::Conflict("2025-08-25#juanma#09:30".to_string());
    let storage = BookingError::Storage(eyre::eyre!("Database connection failed"));
    let internal = BookingError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: No booking matches token"
    );
    assert_eq!(validation.to_string(), "Validation error: Missing fields");
    assert_eq!(
        conflict.to_string(),
        "Slot already booked: 2025-08-25#juanma#09:30"
    );
    assert!(storage.to_string().contains("Storage error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let booking_error = BookingError::Internal(Box::new(io_error));

    assert!(booking_error.source().is_some());
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(BookingError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_trait_implementation() {
    let eyre_error = eyre::eyre!("Storage error");
    let booking_error = BookingError::Storage(eyre_error);

    assert!(booking_error.to_string().contains("Storage error"));
}
