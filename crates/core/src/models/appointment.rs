use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{BookingError, BookingResult},
    models::time_slot::{format_time, TimeSlot},
};

/// Appointment status. The only transition is the pending/completed toggle;
/// cancellation is modelled as deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Completed,
}

impl AppointmentStatus {
    pub fn toggled(self) -> Self {
        match self {
            AppointmentStatus::Pending => AppointmentStatus::Completed,
            AppointmentStatus::Completed => AppointmentStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AppointmentStatus::Pending),
            "completed" => Ok(AppointmentStatus::Completed),
            other => Err(BookingError::Validation(format!(
                "Unknown appointment status: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub stylist_id: Uuid,
    pub service_id: Uuid,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub start_datetime: NaiveDateTime,
    pub end_datetime: Option<NaiveDateTime>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Whether `time` on this appointment's date falls inside `[start, end)`.
    ///
    /// Appointments without an end instant only cover their exact start.
    pub fn covers(&self, time: NaiveTime) -> bool {
        let instant = self.appointment_date.and_time(time);
        match self.end_datetime {
            Some(end) => self.start_datetime <= instant && instant < end,
            None => self.start_datetime == instant,
        }
    }
}

/// A fully validated appointment ready to be written by a store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub customer_id: Uuid,
    pub stylist_id: Uuid,
    pub service_id: Uuid,
    pub slot: TimeSlot,
    pub end_datetime: NaiveDateTime,
    pub notes: Option<String>,
}

/// Raw booking payload as received over HTTP.
///
/// Every field is optional so a missing value surfaces as a validation error
/// rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub stylist_id: Option<Uuid>,
    pub service_id: Option<Uuid>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
}

/// A booking request whose required fields are present and well-formed.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub stylist_id: Uuid,
    pub service_id: Uuid,
    pub slot: TimeSlot,
    pub notes: Option<String>,
}

impl TryFrom<CreateAppointmentRequest> for BookingRequest {
    type Error = BookingError;

    fn try_from(request: CreateAppointmentRequest) -> BookingResult<Self> {
        let (Some(stylist_id), Some(service_id), Some(date), Some(time)) = (
            request.stylist_id,
            request.service_id,
            request.date.as_deref().filter(|d| !d.trim().is_empty()),
            request.time.as_deref().filter(|t| !t.trim().is_empty()),
        ) else {
            return Err(BookingError::Validation(
                "Missing required fields".to_string(),
            ));
        };

        let slot = TimeSlot::parse(Some(date), Some(time))?;

        Ok(Self {
            stylist_id,
            service_id,
            slot,
            notes: request.notes.filter(|n| !n.trim().is_empty()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub stylist_id: Uuid,
    pub service_id: Uuid,
    pub appointment_date: String,
    pub appointment_time: String,
    pub start_datetime: NaiveDateTime,
    pub end_datetime: Option<NaiveDateTime>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            customer_id: appointment.customer_id,
            stylist_id: appointment.stylist_id,
            service_id: appointment.service_id,
            appointment_date: appointment.appointment_date.to_string(),
            appointment_time: format_time(appointment.appointment_time),
            start_datetime: appointment.start_datetime,
            end_datetime: appointment.end_datetime,
            status: appointment.status,
            notes: appointment.notes,
            created_at: appointment.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleStatusResponse {
    pub id: Uuid,
    pub new_status: AppointmentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAppointmentResponse {
    pub id: Uuid,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub stylist_id: Uuid,
    pub date: String,
    pub available_slots: Vec<String>,
}
