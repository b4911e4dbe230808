//! # Appointment Lifecycle Manager
//!
//! Reads, toggles and deletes existing appointments on behalf of an
//! authenticated caller. The state machine is `pending <-> completed`, with
//! deletion as terminal removal from either state.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::{
    errors::{BookingError, BookingResult},
    models::{appointment::Appointment, user::CurrentUser},
    store::AppointmentStore,
};

fn not_found(id: Uuid) -> BookingError {
    BookingError::NotFound(format!("Appointment with ID {} not found", id))
}

pub struct AppointmentManager {
    store: Arc<dyn AppointmentStore>,
}

impl AppointmentManager {
    pub fn new(store: Arc<dyn AppointmentStore>) -> Self {
        Self { store }
    }

    async fn load(&self, id: Uuid) -> BookingResult<Appointment> {
        self.store
            .get_appointment(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Fetches an appointment visible to `requester`: an admin, the owning
    /// customer or the assigned stylist.
    pub async fn get(&self, id: Uuid, requester: &CurrentUser) -> BookingResult<Appointment> {
        let appointment = self.load(id).await?;

        if requester.is_admin
            || appointment.customer_id == requester.id
            || requester.is_assigned_stylist(appointment.stylist_id)
        {
            Ok(appointment)
        } else {
            Err(BookingError::Authorization(
                "Not allowed to view this appointment".to_string(),
            ))
        }
    }

    /// Flips the status between pending and completed.
    ///
    /// Only the assigned stylist or an admin may toggle. Future appointments
    /// can be marked completed. The flip itself happens in the store, so
    /// concurrent toggles never collapse into one.
    pub async fn toggle_status(
        &self,
        id: Uuid,
        requester: &CurrentUser,
    ) -> BookingResult<Appointment> {
        let appointment = self.load(id).await?;

        if !(requester.is_admin || requester.is_assigned_stylist(appointment.stylist_id)) {
            return Err(BookingError::Authorization(
                "Only the assigned stylist or an admin can update this appointment".to_string(),
            ));
        }

        // None when the row was deleted after the permission check
        let toggled = self
            .store
            .toggle_appointment_status(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        info!("Appointment {} status toggled to {}", id, toggled.status);
        Ok(toggled)
    }

    /// Removes an appointment. Allowed for the owning customer or an admin.
    ///
    /// Returns the removed record so the caller can notify the customer.
    pub async fn delete(&self, id: Uuid, requester: &CurrentUser) -> BookingResult<Appointment> {
        let appointment = self.load(id).await?;

        if !(requester.is_admin || appointment.customer_id == requester.id) {
            return Err(BookingError::Authorization(
                "Only the customer who booked this appointment or an admin can delete it"
                    .to_string(),
            ));
        }

        if !self.store.delete_appointment(id).await? {
            return Err(not_found(id));
        }

        info!(
            "Appointment {} for stylist {} deleted",
            id, appointment.stylist_id
        );
        Ok(appointment)
    }

    pub async fn list_for_customer(
        &self,
        requester: &CurrentUser,
    ) -> BookingResult<Vec<Appointment>> {
        Ok(self.store.list_customer_appointments(requester.id).await?)
    }

    pub async fn list_for_stylist(
        &self,
        stylist_id: Uuid,
        requester: &CurrentUser,
    ) -> BookingResult<Vec<Appointment>> {
        if !(requester.is_admin || requester.is_assigned_stylist(stylist_id)) {
            return Err(BookingError::Authorization(
                "Not allowed to view this stylist's appointments".to_string(),
            ));
        }
        Ok(self.store.list_stylist_appointments(stylist_id).await?)
    }
}
