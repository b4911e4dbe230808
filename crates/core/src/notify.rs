use async_trait::async_trait;

use crate::models::{appointment::Appointment, time_slot::format_time};

/// Best-effort outbound notification channel.
///
/// Callers treat every failure as non-fatal: a notification must never block
/// or undo the scheduling operation that triggered it.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, recipient: &str, subject: &str, body: &str) -> eyre::Result<()>;
}

/// Subject and body sent to a customer after a successful reservation.
pub fn booking_confirmation(appointment: &Appointment) -> (String, String) {
    let body = format!(
        "Your appointment on {} at {} has been booked and is pending.",
        appointment.appointment_date,
        format_time(appointment.appointment_time),
    );
    ("Appointment Confirmation".to_string(), body)
}

pub fn cancellation_notice(appointment: &Appointment) -> (String, String) {
    let body = format!(
        "Your appointment on {} at {} has been cancelled.",
        appointment.appointment_date,
        format_time(appointment.appointment_time),
    );
    ("Appointment Cancelled".to_string(), body)
}
