use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_user_email(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<String>> {
    let email = sqlx::query_scalar::<_, String>(
        r#"
        SELECT email
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(email)
}
