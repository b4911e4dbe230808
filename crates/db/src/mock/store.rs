use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use eyre::eyre;
use salonbook_core::{
    errors::{StoreError, StoreResult},
    models::{
        appointment::{Appointment, AppointmentStatus, NewAppointment},
        salon::{Service, Stylist},
    },
    store::AppointmentStore,
};
use uuid::Uuid;

#[derive(Default)]
struct MemoryState {
    appointments: HashMap<Uuid, Appointment>,
    services: HashMap<Uuid, Service>,
    stylists: HashMap<Uuid, Stylist>,
    user_emails: HashMap<Uuid, String>,
}

/// A store that keeps everything in memory behind one lock.
///
/// Inserts check the `(stylist_id, start_datetime)` key under the same lock
/// that performs the write, matching the guarantee of the unique constraint
/// in the PostgreSQL schema.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<MemoryState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> StoreResult<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| StoreError::Other(eyre!("in-memory store lock poisoned")))
    }

    pub fn add_service(&self, service: Service) -> StoreResult<()> {
        self.state()?.services.insert(service.id, service);
        Ok(())
    }

    pub fn add_stylist(&self, stylist: Stylist) -> StoreResult<()> {
        self.state()?.stylists.insert(stylist.id, stylist);
        Ok(())
    }

    pub fn add_user_email(&self, user_id: Uuid, email: &str) -> StoreResult<()> {
        self.state()?.user_emails.insert(user_id, email.to_string());
        Ok(())
    }

    /// Changes a service's duration without touching existing appointments.
    pub fn set_service_duration(&self, service_id: Uuid, minutes: i32) -> StoreResult<()> {
        let mut state = self.state()?;
        let service = state
            .services
            .get_mut(&service_id)
            .ok_or_else(|| StoreError::Other(eyre!("service {} not found", service_id)))?;
        service.duration_minutes = minutes;
        Ok(())
    }

    pub fn appointment_count(&self) -> StoreResult<usize> {
        Ok(self.state()?.appointments.len())
    }
}

fn sorted(mut appointments: Vec<Appointment>) -> Vec<Appointment> {
    appointments.sort_by_key(|a| a.start_datetime);
    appointments
}

#[async_trait]
impl AppointmentStore for InMemoryStore {
    async fn find_appointment(
        &self,
        stylist_id: Uuid,
        start: NaiveDateTime,
    ) -> StoreResult<Option<Appointment>> {
        Ok(self
            .state()?
            .appointments
            .values()
            .find(|a| a.stylist_id == stylist_id && a.start_datetime == start)
            .cloned())
    }

    async fn insert_appointment(&self, new: NewAppointment) -> StoreResult<Appointment> {
        let mut state = self.state()?;

        if !state.stylists.contains_key(&new.stylist_id) {
            return Err(StoreError::ForeignKeyViolation("stylist_id".to_string()));
        }
        if !state.services.contains_key(&new.service_id) {
            return Err(StoreError::ForeignKeyViolation("service_id".to_string()));
        }
        if state
            .appointments
            .values()
            .any(|a| a.stylist_id == new.stylist_id && a.start_datetime == new.slot.instant())
        {
            return Err(StoreError::UniqueViolation(
                "uq_appointment_stylist_start".to_string(),
            ));
        }

        let appointment = Appointment {
            id: Uuid::new_v4(),
            customer_id: new.customer_id,
            stylist_id: new.stylist_id,
            service_id: new.service_id,
            appointment_date: new.slot.date(),
            appointment_time: new.slot.time(),
            start_datetime: new.slot.instant(),
            end_datetime: Some(new.end_datetime),
            status: AppointmentStatus::Pending,
            notes: new.notes,
            created_at: Utc::now(),
        };
        state.appointments.insert(appointment.id, appointment.clone());

        Ok(appointment)
    }

    async fn list_appointments(
        &self,
        stylist_id: Uuid,
        date: NaiveDate,
    ) -> StoreResult<Vec<Appointment>> {
        let appointments = self
            .state()?
            .appointments
            .values()
            .filter(|a| a.stylist_id == stylist_id && a.appointment_date == date)
            .cloned()
            .collect();
        Ok(sorted(appointments))
    }

    async fn list_stylist_appointments(&self, stylist_id: Uuid) -> StoreResult<Vec<Appointment>> {
        let appointments = self
            .state()?
            .appointments
            .values()
            .filter(|a| a.stylist_id == stylist_id)
            .cloned()
            .collect();
        Ok(sorted(appointments))
    }

    async fn list_customer_appointments(
        &self,
        customer_id: Uuid,
    ) -> StoreResult<Vec<Appointment>> {
        let appointments = self
            .state()?
            .appointments
            .values()
            .filter(|a| a.customer_id == customer_id)
            .cloned()
            .collect();
        Ok(sorted(appointments))
    }

    async fn get_appointment(&self, id: Uuid) -> StoreResult<Option<Appointment>> {
        Ok(self.state()?.appointments.get(&id).cloned())
    }

    async fn toggle_appointment_status(&self, id: Uuid) -> StoreResult<Option<Appointment>> {
        Ok(self.state()?.appointments.get_mut(&id).map(|appointment| {
            appointment.status = appointment.status.toggled();
            appointment.clone()
        }))
    }

    async fn delete_appointment(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.state()?.appointments.remove(&id).is_some())
    }

    async fn get_service(&self, id: Uuid) -> StoreResult<Option<Service>> {
        Ok(self.state()?.services.get(&id).cloned())
    }

    async fn get_stylist(&self, id: Uuid) -> StoreResult<Option<Stylist>> {
        Ok(self.state()?.stylists.get(&id).cloned())
    }

    async fn find_user_email(&self, user_id: Uuid) -> StoreResult<Option<String>> {
        Ok(self.state()?.user_emails.get(&user_id).cloned())
    }
}
