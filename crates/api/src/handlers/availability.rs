//! # Availability Handlers
//!
//! Serves the open start times on a stylist's day.
//!
//! The day is a fixed grid from 09:00 to 18:00 in 30 minute steps. Slots are
//! removed according to the configured
//! [`AvailabilityMode`](salonbook_core::scheduling::AvailabilityMode); the
//! bookings are re-read on every request so concurrent reservations are
//! always reflected.

use axum::{extract::State, Json};
use salonbook_core::{
    errors::BookingError,
    models::{
        appointment::{AvailabilityQuery, AvailabilityResponse},
        time_slot::{format_time, parse_date},
    },
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{
        error_handling::AppError,
        extract::{AppPath, AppQuery},
    },
    ApiState,
};

/// Lists open slots for a stylist on one date
///
/// # Endpoint
///
/// ```text
/// GET /api/stylists/{stylist_id}/availability?date=YYYY-MM-DD
/// ```
///
/// # Errors
///
/// * `BookingError::Validation` - `date` is missing or not `YYYY-MM-DD`
/// * `BookingError::Database` - bookings could not be read
#[axum::debug_handler]
pub async fn get_stylist_availability(
    State(state): State<Arc<ApiState>>,
    AppPath(stylist_id): AppPath<Uuid>,
    AppQuery(query): AppQuery<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let raw_date = query
        .date
        .filter(|d| !d.is_empty())
        .ok_or_else(|| BookingError::Validation("Date parameter is required".to_string()))?;
    let date = parse_date(&raw_date)?;

    let open = state.availability.availability(stylist_id, date).await?;

    Ok(Json(AvailabilityResponse {
        stylist_id,
        date: raw_date,
        available_slots: open.into_iter().map(format_time).collect(),
    }))
}
