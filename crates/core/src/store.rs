//! Persistence interface consumed by the scheduling services.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::{
    errors::StoreResult,
    models::{
        appointment::{Appointment, NewAppointment},
        salon::{Service, Stylist},
    },
};

/// Storage backend for appointments and the catalogue data booking needs.
///
/// Implementations must reject a second appointment with the same
/// `(stylist_id, start_datetime)` by returning
/// [`StoreError::UniqueViolation`](crate::errors::StoreError::UniqueViolation)
/// from [`insert_appointment`](AppointmentStore::insert_appointment), atomically
/// with respect to concurrent inserts.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn find_appointment(
        &self,
        stylist_id: Uuid,
        start: NaiveDateTime,
    ) -> StoreResult<Option<Appointment>>;

    async fn insert_appointment(&self, appointment: NewAppointment) -> StoreResult<Appointment>;

    /// Appointments for a stylist on one calendar date, ordered by start.
    async fn list_appointments(
        &self,
        stylist_id: Uuid,
        date: NaiveDate,
    ) -> StoreResult<Vec<Appointment>>;

    async fn list_stylist_appointments(&self, stylist_id: Uuid) -> StoreResult<Vec<Appointment>>;

    async fn list_customer_appointments(&self, customer_id: Uuid)
        -> StoreResult<Vec<Appointment>>;

    async fn get_appointment(&self, id: Uuid) -> StoreResult<Option<Appointment>>;

    /// Flips `pending <-> completed` in one atomic step and returns the
    /// updated record, or `None` when no appointment has this id.
    async fn toggle_appointment_status(&self, id: Uuid) -> StoreResult<Option<Appointment>>;

    /// Returns whether a row was removed.
    async fn delete_appointment(&self, id: Uuid) -> StoreResult<bool>;

    async fn get_service(&self, id: Uuid) -> StoreResult<Option<Service>>;

    async fn get_stylist(&self, id: Uuid) -> StoreResult<Option<Stylist>>;

    /// Contact address used for notifications.
    async fn find_user_email(&self, user_id: Uuid) -> StoreResult<Option<String>>;
}
