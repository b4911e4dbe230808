use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use eyre::{eyre, Result};
use salonbook_core::models::{
    appointment::{Appointment, AppointmentStatus},
    salon::Service,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub stylist_id: Uuid,
    pub service_id: Uuid,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub start_datetime: NaiveDateTime,
    pub end_datetime: Option<NaiveDateTime>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = eyre::Report;

    fn try_from(row: DbAppointment) -> Result<Self> {
        let status: AppointmentStatus = row
            .status
            .parse()
            .map_err(|e| eyre!("Appointment {} has a corrupt status: {}", row.id, e))?;

        Ok(Appointment {
            id: row.id,
            customer_id: row.customer_id,
            stylist_id: row.stylist_id,
            service_id: row.service_id,
            appointment_date: row.appointment_date,
            appointment_time: row.appointment_time,
            start_datetime: row.start_datetime,
            end_datetime: row.end_datetime,
            status,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub name: String,
    pub duration: i32,
    pub price: f64,
}

impl From<DbService> for Service {
    fn from(row: DbService) -> Self {
        Service {
            id: row.id,
            salon_id: row.salon_id,
            name: row.name,
            duration_minutes: row.duration,
            price: row.price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStylist {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub name: String,
}
