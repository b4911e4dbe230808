use eyre::Result;
use sqlx::{Executor, Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create salons table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS salons (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(100) NOT NULL,
            location VARCHAR(255) NOT NULL,
            contact VARCHAR(100) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create stylists table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stylists (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            salon_id UUID NOT NULL REFERENCES salons(id) ON DELETE CASCADE,
            name VARCHAR(100) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            username VARCHAR(80) NOT NULL UNIQUE,
            email VARCHAR(120) NOT NULL UNIQUE,
            is_admin BOOLEAN NOT NULL DEFAULT FALSE,
            stylist_id UUID NULL REFERENCES stylists(id) ON DELETE SET NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            salon_id UUID NOT NULL REFERENCES salons(id) ON DELETE CASCADE,
            name VARCHAR(100) NOT NULL,
            duration INTEGER NOT NULL,
            price DOUBLE PRECISION NOT NULL DEFAULT 0,
            CONSTRAINT positive_duration CHECK (duration > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create stylist_services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stylist_services (
            stylist_id UUID NOT NULL REFERENCES stylists(id) ON DELETE CASCADE,
            service_id UUID NOT NULL REFERENCES services(id) ON DELETE CASCADE,
            PRIMARY KEY (stylist_id, service_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table; the unique key is the double-booking guard
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            customer_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            stylist_id UUID NOT NULL REFERENCES stylists(id) ON DELETE CASCADE,
            service_id UUID NOT NULL REFERENCES services(id),
            appointment_date DATE NOT NULL,
            appointment_time TIME NOT NULL,
            start_datetime TIMESTAMP NOT NULL,
            end_datetime TIMESTAMP NULL,
            status VARCHAR(20) NOT NULL DEFAULT 'pending',
            notes TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT uq_appointment_stylist_start UNIQUE (stylist_id, start_datetime),
            CONSTRAINT valid_status CHECK (status IN ('pending', 'completed'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create reviews table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            customer_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            stylist_id UUID NOT NULL REFERENCES stylists(id) ON DELETE CASCADE,
            appointment_id UUID NULL REFERENCES appointments(id) ON DELETE CASCADE,
            rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
            comment TEXT NULL,
            is_hidden BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes; several statements, so this goes through the simple query protocol
    pool.execute(
        r#"
        CREATE INDEX IF NOT EXISTS idx_appointments_stylist_date ON appointments(stylist_id, appointment_date);
        CREATE INDEX IF NOT EXISTS idx_appointments_customer_id ON appointments(customer_id);
        CREATE INDEX IF NOT EXISTS idx_reviews_appointment_id ON reviews(appointment_id);
        CREATE INDEX IF NOT EXISTS idx_stylists_salon_id ON stylists(salon_id);
        "#,
    )
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
