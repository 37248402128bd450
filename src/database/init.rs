//! Startup schema creation. Both tables are created lazily so a fresh
//! database works without a separate migration step.

use sqlx::PgPool;

pub async fn create_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id BIGINT PRIMARY KEY,
            location VARCHAR(255),
            unit CHAR(1)
        )",
    )
    .execute(pool)
    .await?;

    // No primary key: duplicate reminders are legal and each row is deleted
    // independently by exact match.
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS reminders (
            user_id BIGINT NOT NULL,
            reminder TEXT NOT NULL,
            remind_time TIMESTAMPTZ NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
