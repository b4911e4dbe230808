use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use salonbook_core::models::appointment::{AppointmentResponse, AppointmentStatus};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::test_utils::{admin, bearer, new_customer, TestContext};

async fn book(ctx: &TestContext, date: &str, time: &str) -> AppointmentResponse {
    let (name, value) = bearer(&ctx.customer);
    let response = ctx
        .server
        .post("/api/appointments")
        .add_header(name, value)
        .json(&ctx.booking(date, time))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<AppointmentResponse>()
}

#[tokio::test]
async fn test_create_appointment_returns_created_booking() {
    let ctx = TestContext::new();

    let appointment = book(&ctx, "2030-03-01", "10:00").await;

    assert_eq!(appointment.customer_id, ctx.customer.id);
    assert_eq!(appointment.stylist_id, ctx.stylist_id);
    assert_eq!(appointment.appointment_date, "2030-03-01");
    assert_eq!(appointment.appointment_time, "10:00");
    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(
        appointment.end_datetime.map(|end| end.to_string()),
        Some("2030-03-01 11:30:00".to_string())
    );
    assert_eq!(ctx.store.appointment_count().unwrap(), 1);
}

#[tokio::test]
async fn test_create_appointment_requires_token() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/appointments")
        .json(&ctx.booking("2030-03-01", "10:00"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_appointment_rejects_foreign_token() {
    let ctx = TestContext::new();
    let token =
        salonbook_api::middleware::auth::encode_token(&ctx.customer, "other-secret", 3600).unwrap();

    let response = ctx
        .server
        .post("/api/appointments")
        .add_header(
            axum::http::header::AUTHORIZATION,
            axum::http::HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        )
        .json(&ctx.booking("2030-03-01", "10:00"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_double_booking_is_a_conflict() {
    let ctx = TestContext::new();
    book(&ctx, "2030-03-01", "10:00").await;

    let (name, value) = bearer(&new_customer());
    let response = ctx
        .server
        .post("/api/appointments")
        .add_header(name, value)
        .json(&ctx.booking("2030-03-01", "10:00"))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Stylist already booked at this time" })
    );
}

#[tokio::test]
async fn test_create_appointment_validation_failures() {
    let ctx = TestContext::new();
    let (name, value) = bearer(&ctx.customer);

    let cases = [
        json!({ "stylist_id": ctx.stylist_id, "date": "2030-03-01", "time": "10:00" }),
        ctx.booking("2030-3-1", "10:00"),
        ctx.booking("2030-03-01", "10:00:00"),
        ctx.booking("2020-03-01", "10:00"),
        json!({
            "stylist_id": ctx.stylist_id,
            "service_id": ctx.unoffered_service_id,
            "date": "2030-03-01",
            "time": "10:00",
        }),
    ];

    for body in cases {
        let response = ctx
            .server
            .post("/api/appointments")
            .add_header(name.clone(), value.clone())
            .json(&body)
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{body}");
    }
    assert_eq!(ctx.store.appointment_count().unwrap(), 0);
}

#[tokio::test]
async fn test_create_appointment_unknown_service_is_not_found() {
    let ctx = TestContext::new();
    let (name, value) = bearer(&ctx.customer);

    let response = ctx
        .server
        .post("/api/appointments")
        .add_header(name, value)
        .json(&json!({
            "stylist_id": ctx.stylist_id,
            "service_id": Uuid::new_v4(),
            "date": "2030-03-01",
            "time": "10:00",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({ "error": "Service not found" }));
}

#[tokio::test]
async fn test_get_appointment_visibility() {
    let ctx = TestContext::new();
    let appointment = book(&ctx, "2030-03-01", "10:00").await;
    let path = format!("/api/appointments/{}", appointment.id);

    let (name, value) = bearer(&ctx.customer);
    let response = ctx.server.get(&path).add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<AppointmentResponse>(), appointment);

    let (name, value) = bearer(&ctx.stylist);
    let response = ctx.server.get(&path).add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let (name, value) = bearer(&new_customer());
    let response = ctx.server.get(&path).add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let (name, value) = bearer(&admin());
    let response = ctx
        .server
        .get(&format!("/api/appointments/{}", Uuid::new_v4()))
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_status_twice_restores_pending() {
    let ctx = TestContext::new();
    let appointment = book(&ctx, "2030-03-01", "10:00").await;
    let path = format!("/api/appointments/{}", appointment.id);

    let (name, value) = bearer(&ctx.stylist);
    let response = ctx
        .server
        .patch(&path)
        .add_header(name.clone(), value.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": appointment.id, "new_status": "completed" })
    );

    let response = ctx.server.patch(&path).add_header(name, value).await;
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": appointment.id, "new_status": "pending" })
    );
}

#[tokio::test]
async fn test_customer_cannot_toggle_status() {
    let ctx = TestContext::new();
    let appointment = book(&ctx, "2030-03-01", "10:00").await;

    let (name, value) = bearer(&ctx.customer);
    let response = ctx
        .server
        .patch(&format!("/api/appointments/{}", appointment.id))
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_delete_appointment_frees_the_slot() {
    let ctx = TestContext::new();
    let appointment = book(&ctx, "2030-03-01", "10:00").await;
    let path = format!("/api/appointments/{}", appointment.id);

    let (name, value) = bearer(&new_customer());
    let response = ctx.server.delete(&path).add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let (name, value) = bearer(&ctx.customer);
    let response = ctx.server.delete(&path).add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": appointment.id, "message": "Appointment deleted successfully" })
    );
    assert_eq!(ctx.store.appointment_count().unwrap(), 0);

    let rebooked = book(&ctx, "2030-03-01", "10:00").await;
    assert_ne!(rebooked.id, appointment.id);
}

#[tokio::test]
async fn test_list_endpoints() {
    let ctx = TestContext::new();
    book(&ctx, "2030-03-02", "15:00").await;
    book(&ctx, "2030-03-01", "10:00").await;

    let (name, value) = bearer(&ctx.customer);
    let mine = ctx
        .server
        .get("/api/appointments")
        .add_header(name, value)
        .await
        .json::<Vec<AppointmentResponse>>();
    let dates: Vec<_> = mine.iter().map(|a| a.appointment_date.as_str()).collect();
    assert_eq!(dates, vec!["2030-03-01", "2030-03-02"]);

    let path = format!("/api/stylists/{}/appointments", ctx.stylist_id);
    let (name, value) = bearer(&ctx.stylist);
    let response = ctx.server.get(&path).add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<AppointmentResponse>>().len(), 2);

    let (name, value) = bearer(&ctx.customer);
    let response = ctx.server.get(&path).add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_malformed_booking_body_is_a_json_bad_request() {
    let ctx = TestContext::new();
    let (name, value) = bearer(&ctx.customer);

    let response = ctx
        .server
        .post("/api/appointments")
        .add_header(name.clone(), value.clone())
        .json(&json!({
            "stylist_id": "not-a-uuid",
            "service_id": ctx.service_id,
            "date": "2030-03-01",
            "time": "10:00",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().is_some_and(|m| m.contains("stylist_id")));

    let response = ctx
        .server
        .post("/api/appointments")
        .add_header(name, value)
        .text("stylist_id=abc")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
    assert_eq!(ctx.store.appointment_count().unwrap(), 0);
}

#[tokio::test]
async fn test_malformed_appointment_id_is_a_json_bad_request() {
    let ctx = TestContext::new();
    let (name, value) = bearer(&admin());

    let response = ctx
        .server
        .get("/api/appointments/not-a-uuid")
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}
