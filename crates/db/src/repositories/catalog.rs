use crate::models::{DbService, DbStylist};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_service_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(
        r#"
        SELECT id, salon_id, name, duration, price
        FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn get_stylist_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbStylist>> {
    let stylist = sqlx::query_as::<_, DbStylist>(
        r#"
        SELECT id, salon_id, name
        FROM stylists
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(stylist)
}

pub async fn get_stylist_service_ids(pool: &Pool<Postgres>, stylist_id: Uuid) -> Result<Vec<Uuid>> {
    let service_ids = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT service_id
        FROM stylist_services
        WHERE stylist_id = $1
        "#,
    )
    .bind(stylist_id)
    .fetch_all(pool)
    .await?;

    Ok(service_ids)
}
