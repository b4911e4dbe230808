use std::error::Error;

use salonbook_core::errors::{BookingError, BookingResult, StoreError};

#[test]
fn test_booking_error_display() {
    let not_found = BookingError::NotFound("Service not found".to_string());
    let validation = BookingError::Validation("Missing required fields".to_string());
    let conflict = BookingError::Conflict("Stylist already booked at this time".to_string());
    let authentication = BookingError::Authentication("Invalid token".to_string());
    let authorization = BookingError::Authorization("Not authorized".to_string());
    let database = BookingError::Database(eyre::eyre!("Database connection failed"));

    assert_eq!(not_found.to_string(), "Resource not found: Service not found");
    assert_eq!(
        validation.to_string(),
        "Validation error: Missing required fields"
    );
    assert_eq!(
        conflict.to_string(),
        "Conflict: Stylist already booked at this time"
    );
    assert_eq!(
        authentication.to_string(),
        "Authentication error: Invalid token"
    );
    assert_eq!(
        authorization.to_string(),
        "Authorization error: Not authorized"
    );
    assert!(database.to_string().contains("Database error:"));
}

#[test]
fn test_internal_error_keeps_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let booking_error = BookingError::Internal(Box::new(io_error));

    assert!(booking_error.source().is_some());
    assert!(booking_error.to_string().contains("IO error"));
}

#[test]
fn test_unique_violation_becomes_conflict() {
    let err: BookingError =
        StoreError::UniqueViolation("uq_appointment_stylist_start".to_string()).into();

    match err {
        BookingError::Conflict(message) => {
            assert_eq!(message, "Stylist already booked at this time")
        }
        other => panic!("expected conflict, got {other:?}"),
    }
}

#[test]
fn test_foreign_key_violation_becomes_not_found() {
    let err: BookingError = StoreError::ForeignKeyViolation("stylist_id".to_string()).into();

    assert!(matches!(err, BookingError::NotFound(ref m) if m.contains("stylist_id")));
}

#[test]
fn test_other_store_failure_becomes_database_error() {
    let err: BookingError = StoreError::Other(eyre::eyre!("connection reset")).into();

    assert!(matches!(err, BookingError::Database(_)));
    assert!(err.to_string().contains("connection reset"));
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(BookingError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}
