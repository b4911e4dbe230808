use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use salonbook_core::{models::appointment::AvailabilityResponse, scheduling::AvailabilityMode};
use serde_json::{json, Value};

use crate::test_utils::{bearer, TestContext};

async fn availability(ctx: &TestContext, date: &str) -> AvailabilityResponse {
    let response = ctx
        .server
        .get(&format!("/api/stylists/{}/availability", ctx.stylist_id))
        .add_query_param("date", date)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    response.json::<AvailabilityResponse>()
}

async fn book(ctx: &TestContext, date: &str, time: &str) {
    let (name, value) = bearer(&ctx.customer);
    let response = ctx
        .server
        .post("/api/appointments")
        .add_header(name, value)
        .json(&ctx.booking(date, time))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_empty_day_lists_full_grid() {
    let ctx = TestContext::new();

    let response = availability(&ctx, "2030-03-01").await;

    assert_eq!(response.stylist_id, ctx.stylist_id);
    assert_eq!(response.date, "2030-03-01");
    assert_eq!(response.available_slots.len(), 19);
    assert_eq!(response.available_slots.first().map(String::as_str), Some("09:00"));
    assert_eq!(response.available_slots.last().map(String::as_str), Some("18:00"));
}

#[tokio::test]
async fn test_booked_start_time_is_excluded() {
    let ctx = TestContext::new();
    book(&ctx, "2030-03-01", "10:00").await;

    let slots = availability(&ctx, "2030-03-01").await.available_slots;
    assert!(!slots.contains(&"10:00".to_string()));
    assert!(slots.contains(&"10:30".to_string()));
    assert_eq!(slots.len(), 18);

    // Other days are unaffected.
    assert_eq!(availability(&ctx, "2030-03-02").await.available_slots.len(), 19);
}

#[tokio::test]
async fn test_overlap_mode_excludes_whole_booking() {
    let ctx = TestContext::with_mode(AvailabilityMode::Overlap);
    book(&ctx, "2030-03-01", "10:00").await;

    let slots = availability(&ctx, "2030-03-01").await.available_slots;
    for taken in ["10:00", "10:30", "11:00"] {
        assert!(!slots.contains(&taken.to_string()), "{taken} should be taken");
    }
    assert!(slots.contains(&"11:30".to_string()));
}

#[tokio::test]
async fn test_date_parameter_is_required_and_checked() {
    let ctx = TestContext::new();
    let path = format!("/api/stylists/{}/availability", ctx.stylist_id);

    let response = ctx.server.get(&path).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Date parameter is required" })
    );

    let response = ctx
        .server
        .get(&path)
        .add_query_param("date", "03/01/2030")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
