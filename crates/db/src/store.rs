//! PostgreSQL implementation of the scheduling persistence interface.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use salonbook_core::{
    errors::{StoreError, StoreResult},
    models::{
        appointment::{Appointment, NewAppointment},
        salon::{Service, Stylist},
    },
    store::AppointmentStore,
};
use uuid::Uuid;

use crate::{
    models::DbAppointment,
    repositories::{appointment, catalog, user},
    DbPool,
};

/// Classifies a repository failure, surfacing constraint violations.
///
/// The `uq_appointment_stylist_start` constraint is what makes concurrent
/// reservations of one slot fail deterministically.
pub fn classify(report: eyre::Report) -> StoreError {
    if let Some(sqlx::Error::Database(db_err)) = report.downcast_ref::<sqlx::Error>() {
        let detail = db_err
            .constraint()
            .unwrap_or_else(|| db_err.message())
            .to_string();
        if db_err.is_unique_violation() {
            return StoreError::UniqueViolation(detail);
        }
        if db_err.is_foreign_key_violation() {
            return StoreError::ForeignKeyViolation(detail);
        }
    }
    StoreError::Other(report)
}

fn into_appointments(rows: Vec<DbAppointment>) -> StoreResult<Vec<Appointment>> {
    rows.into_iter()
        .map(|row| Appointment::try_from(row).map_err(StoreError::Other))
        .collect()
}

#[derive(Clone)]
pub struct PgAppointmentStore {
    pool: DbPool,
}

impl PgAppointmentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentStore for PgAppointmentStore {
    async fn find_appointment(
        &self,
        stylist_id: Uuid,
        start: NaiveDateTime,
    ) -> StoreResult<Option<Appointment>> {
        appointment::get_appointment_by_stylist_start(&self.pool, stylist_id, start)
            .await
            .map_err(classify)?
            .map(Appointment::try_from)
            .transpose()
            .map_err(StoreError::Other)
    }

    async fn insert_appointment(&self, new: NewAppointment) -> StoreResult<Appointment> {
        let row = appointment::create_appointment(
            &self.pool,
            new.customer_id,
            new.stylist_id,
            new.service_id,
            new.slot.date(),
            new.slot.time(),
            new.slot.instant(),
            new.end_datetime,
            new.notes.as_deref(),
        )
        .await
        .map_err(classify)?;

        Appointment::try_from(row).map_err(StoreError::Other)
    }

    async fn list_appointments(
        &self,
        stylist_id: Uuid,
        date: NaiveDate,
    ) -> StoreResult<Vec<Appointment>> {
        let rows = appointment::get_appointments_by_stylist_date(&self.pool, stylist_id, date)
            .await
            .map_err(classify)?;
        into_appointments(rows)
    }

    async fn list_stylist_appointments(&self, stylist_id: Uuid) -> StoreResult<Vec<Appointment>> {
        let rows = appointment::get_appointments_by_stylist_id(&self.pool, stylist_id)
            .await
            .map_err(classify)?;
        into_appointments(rows)
    }

    async fn list_customer_appointments(
        &self,
        customer_id: Uuid,
    ) -> StoreResult<Vec<Appointment>> {
        let rows = appointment::get_appointments_by_customer_id(&self.pool, customer_id)
            .await
            .map_err(classify)?;
        into_appointments(rows)
    }

    async fn get_appointment(&self, id: Uuid) -> StoreResult<Option<Appointment>> {
        appointment::get_appointment_by_id(&self.pool, id)
            .await
            .map_err(classify)?
            .map(Appointment::try_from)
            .transpose()
            .map_err(StoreError::Other)
    }

    async fn toggle_appointment_status(&self, id: Uuid) -> StoreResult<Option<Appointment>> {
        appointment::toggle_appointment_status(&self.pool, id)
            .await
            .map_err(classify)?
            .map(Appointment::try_from)
            .transpose()
            .map_err(StoreError::Other)
    }

    async fn delete_appointment(&self, id: Uuid) -> StoreResult<bool> {
        appointment::delete_appointment(&self.pool, id)
            .await
            .map_err(classify)
    }

    async fn get_service(&self, id: Uuid) -> StoreResult<Option<Service>> {
        let service = catalog::get_service_by_id(&self.pool, id)
            .await
            .map_err(classify)?;
        Ok(service.map(Service::from))
    }

    async fn get_stylist(&self, id: Uuid) -> StoreResult<Option<Stylist>> {
        let Some(stylist) = catalog::get_stylist_by_id(&self.pool, id)
            .await
            .map_err(classify)?
        else {
            return Ok(None);
        };

        let service_ids = catalog::get_stylist_service_ids(&self.pool, id)
            .await
            .map_err(classify)?;

        Ok(Some(Stylist {
            id: stylist.id,
            salon_id: stylist.salon_id,
            name: stylist.name,
            service_ids,
        }))
    }

    async fn find_user_email(&self, user_id: Uuid) -> StoreResult<Option<String>> {
        user::get_user_email(&self.pool, user_id)
            .await
            .map_err(classify)
    }
}
