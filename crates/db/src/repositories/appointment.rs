use crate::models::DbAppointment;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const APPOINTMENT_COLUMNS: &str = "id, customer_id, stylist_id, service_id, appointment_date, \
     appointment_time, start_datetime, end_datetime, status, notes, created_at";

#[allow(clippy::too_many_arguments)]
pub async fn create_appointment(
    pool: &Pool<Postgres>,
    customer_id: Uuid,
    stylist_id: Uuid,
    service_id: Uuid,
    appointment_date: NaiveDate,
    appointment_time: NaiveTime,
    start_datetime: NaiveDateTime,
    end_datetime: NaiveDateTime,
    notes: Option<&str>,
) -> Result<DbAppointment> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating appointment: id={}, stylist_id={}, start={}",
        id, stylist_id, start_datetime
    );

    let appointment = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        INSERT INTO appointments (
            id, customer_id, stylist_id, service_id, appointment_date,
            appointment_time, start_datetime, end_datetime, status, notes, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'pending', $9, $10)
        RETURNING {APPOINTMENT_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(customer_id)
    .bind(stylist_id)
    .bind(service_id)
    .bind(appointment_date)
    .bind(appointment_time)
    .bind(start_datetime)
    .bind(end_datetime)
    .bind(notes)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(appointment)
}

pub async fn get_appointment_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        SELECT {APPOINTMENT_COLUMNS}
        FROM appointments
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

pub async fn get_appointment_by_stylist_start(
    pool: &Pool<Postgres>,
    stylist_id: Uuid,
    start_datetime: NaiveDateTime,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        SELECT {APPOINTMENT_COLUMNS}
        FROM appointments
        WHERE stylist_id = $1 AND start_datetime = $2
        "#
    ))
    .bind(stylist_id)
    .bind(start_datetime)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

pub async fn get_appointments_by_stylist_date(
    pool: &Pool<Postgres>,
    stylist_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        SELECT {APPOINTMENT_COLUMNS}
        FROM appointments
        WHERE stylist_id = $1 AND appointment_date = $2
        ORDER BY start_datetime ASC
        "#
    ))
    .bind(stylist_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn get_appointments_by_stylist_id(
    pool: &Pool<Postgres>,
    stylist_id: Uuid,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        SELECT {APPOINTMENT_COLUMNS}
        FROM appointments
        WHERE stylist_id = $1
        ORDER BY start_datetime ASC
        "#
    ))
    .bind(stylist_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn get_appointments_by_customer_id(
    pool: &Pool<Postgres>,
    customer_id: Uuid,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        SELECT {APPOINTMENT_COLUMNS}
        FROM appointments
        WHERE customer_id = $1
        ORDER BY start_datetime ASC
        "#
    ))
    .bind(customer_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

/// Flips the status in a single statement so concurrent toggles serialize
/// on the row lock.
pub async fn toggle_appointment_status(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        UPDATE appointments
        SET status = CASE status WHEN 'pending' THEN 'completed' ELSE 'pending' END
        WHERE id = $1
        RETURNING {APPOINTMENT_COLUMNS}
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

/// Returns whether a row was deleted.
pub async fn delete_appointment(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    // Reviews referencing the appointment go with it (ON DELETE CASCADE)
    let result = sqlx::query(
        r#"
        DELETE FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
