use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use salonbook_api::middleware::{
    auth::{decode_token, encode_token},
    error_handling::{map_error, AppError},
};
use salonbook_core::errors::{BookingError, StoreError};
use uuid::Uuid;

use crate::test_utils::{admin, TestContext, SECRET};

#[rstest]
#[case(BookingError::NotFound("Appointment not found".into()), StatusCode::NOT_FOUND)]
#[case(BookingError::Validation("Missing required fields".into()), StatusCode::BAD_REQUEST)]
#[case(BookingError::Conflict("Stylist already booked at this time".into()), StatusCode::CONFLICT)]
#[case(BookingError::Authentication("Invalid or expired token".into()), StatusCode::UNAUTHORIZED)]
#[case(BookingError::Authorization("Not allowed".into()), StatusCode::FORBIDDEN)]
#[case(BookingError::Database(eyre::eyre!("pool timed out")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: BookingError, #[case] expected: StatusCode) {
    assert_eq!(map_error(error).status(), expected);
}

#[test]
fn test_internal_error_maps_to_server_error() {
    let error = BookingError::Internal(Box::new(std::io::Error::other("disk full")));
    assert_eq!(map_error(error).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_unique_violation_maps_to_conflict() {
    let error: AppError = StoreError::UniqueViolation("uq_appointment_stylist_start".into()).into();
    assert_eq!(error.status(), StatusCode::CONFLICT);
}

#[test]
fn test_token_round_trip_keeps_roles() {
    let user = admin();
    let token = encode_token(&user, SECRET, 60).unwrap();

    let claims = decode_token(&token, SECRET).unwrap();
    assert_eq!(claims.sub, user.id);
    assert!(claims.is_admin);
    assert_eq!(claims.stylist_id, None);

    assert!(matches!(
        decode_token(&token, "wrong-secret"),
        Err(BookingError::Authentication(_))
    ));
}

#[tokio::test]
async fn test_malformed_authorization_header_is_unauthorized() {
    let ctx = TestContext::new();

    for header in ["Basic dXNlcjpwYXNz", "Bearer ", "Bearer not-a-jwt"] {
        let response = ctx
            .server
            .get(&format!("/api/appointments/{}", Uuid::new_v4()))
            .add_header(
                axum::http::header::AUTHORIZATION,
                axum::http::HeaderValue::from_static(header),
            )
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED, "{header}");
    }
}

#[tokio::test]
async fn test_server_error_body_is_generic() {
    let response = map_error(BookingError::Database(eyre::eyre!("password=hunter2")));
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    assert_eq!(&body[..], br#"{"error":"Internal server error"}"#);
}

#[tokio::test]
async fn test_health_endpoint() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>()["status"], "ok");
}
