//! Per-user weather preferences: a stored location and a temperature unit.

use serenity::model::id::UserId;
use sqlx::PgPool;

pub async fn set_location(
    pool: &PgPool,
    user_id: UserId,
    location: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (id, location) VALUES ($1, $2)
         ON CONFLICT (id) DO UPDATE SET location = EXCLUDED.location",
    )
    .bind(user_id.get() as i64)
    .bind(location)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn set_unit(pool: &PgPool, user_id: UserId, unit: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (id, unit) VALUES ($1, $2)
         ON CONFLICT (id) DO UPDATE SET unit = EXCLUDED.unit",
    )
    .bind(user_id.get() as i64)
    .bind(unit)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn get_location(pool: &PgPool, user_id: UserId) -> Result<Option<String>, sqlx::Error> {
    let row: Option<Option<String>> =
        sqlx::query_scalar("SELECT location FROM users WHERE id = $1")
            .bind(user_id.get() as i64)
            .fetch_optional(pool)
            .await?;
    Ok(row.flatten())
}

pub async fn get_unit(pool: &PgPool, user_id: UserId) -> Result<Option<String>, sqlx::Error> {
    let row: Option<Option<String>> = sqlx::query_scalar("SELECT unit FROM users WHERE id = $1")
        .bind(user_id.get() as i64)
        .fetch_optional(pool)
        .await?;
    Ok(row.flatten())
}
