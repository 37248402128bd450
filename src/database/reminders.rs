//! The durable reminder store.
//!
//! Rows are inserted by the `/remind` command and consumed by the scheduler.
//! Both sides rely on Postgres single-statement atomicity only; there is no
//! application-level locking around the table.

use super::models::Reminder;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub async fn create_reminder(
    pool: &PgPool,
    user_id: i64,
    message: &str,
    due_time: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO reminders (user_id, reminder, remind_time) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(message)
        .bind(due_time)
        .execute(pool)
        .await?;
    Ok(())
}

/// All reminders whose due time has passed. Read-only: calling this twice
/// without deleting returns the same rows. Order across equal due times is
/// unspecified.
pub async fn due_reminders(pool: &PgPool, now: DateTime<Utc>) -> Result<Vec<Reminder>, sqlx::Error> {
    sqlx::query_as::<_, Reminder>(
        "SELECT user_id, reminder, remind_time FROM reminders WHERE remind_time <= $1",
    )
    .bind(now)
    .fetch_all(pool)
    .await
}

/// Deletes rows matching the exact (user, message, due time) tuple. Returns
/// the number of rows removed; duplicates are removed together, which is fine
/// since they would all have been delivered on the same tick anyway.
pub async fn delete_reminder(
    pool: &PgPool,
    user_id: i64,
    message: &str,
    due_time: DateTime<Utc>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "DELETE FROM reminders WHERE user_id = $1 AND reminder = $2 AND remind_time = $3",
    )
    .bind(user_id)
    .bind(message)
    .bind(due_time)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
