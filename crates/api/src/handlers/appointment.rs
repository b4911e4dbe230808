use axum::{extract::State, http::StatusCode, Json};
use chrono::Local;
use salonbook_core::{
    models::appointment::{
        AppointmentResponse, CreateAppointmentRequest, DeleteAppointmentResponse,
        ToggleStatusResponse,
    },
    notify::{booking_confirmation, cancellation_notice},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{
        auth::AuthUser,
        error_handling::AppError,
        extract::{AppJson, AppPath},
    },
    notify, ApiState,
};

/// Books a slot for the calling customer.
///
/// Responds `201 Created` with the stored appointment. The confirmation
/// notification is sent in the background after the booking is persisted.
#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    AuthUser(user): AuthUser,
    AppJson(payload): AppJson<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentResponse>), AppError> {
    let now = Local::now().naive_local();
    let appointment = state.ledger.reserve(user.id, payload, now).await?;

    notify::dispatch(
        state.store.clone(),
        state.notifier.clone(),
        appointment.customer_id,
        booking_confirmation(&appointment),
    );

    Ok((StatusCode::CREATED, Json(appointment.into())))
}

#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn list_my_appointments(
    State(state): State<Arc<ApiState>>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let appointments = state.appointments.list_for_customer(&user).await?;
    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn list_stylist_appointments(
    State(state): State<Arc<ApiState>>,
    AuthUser(user): AuthUser,
    AppPath(stylist_id): AppPath<Uuid>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let appointments = state
        .appointments
        .list_for_stylist(stylist_id, &user)
        .await?;
    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn get_appointment(
    State(state): State<Arc<ApiState>>,
    AuthUser(user): AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let appointment = state.appointments.get(id, &user).await?;
    Ok(Json(appointment.into()))
}

#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn toggle_appointment_status(
    State(state): State<Arc<ApiState>>,
    AuthUser(user): AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ToggleStatusResponse>, AppError> {
    let appointment = state.appointments.toggle_status(id, &user).await?;
    Ok(Json(ToggleStatusResponse {
        id: appointment.id,
        new_status: appointment.status,
    }))
}

#[axum::debug_handler(state = Arc<ApiState>)]
pub async fn delete_appointment(
    State(state): State<Arc<ApiState>>,
    AuthUser(user): AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<DeleteAppointmentResponse>, AppError> {
    let appointment = state.appointments.delete(id, &user).await?;

    notify::dispatch(
        state.store.clone(),
        state.notifier.clone(),
        appointment.customer_id,
        cancellation_notice(&appointment),
    );

    Ok(Json(DeleteAppointmentResponse {
        id: appointment.id,
        message: "Appointment deleted successfully".to_string(),
    }))
}
