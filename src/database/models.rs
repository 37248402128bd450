//! Row types shared by the database modules.

use chrono::{DateTime, Utc};

/// One scheduled reminder. Exists from creation until the scheduler delivers
/// it and deletes the row; never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Reminder {
    pub user_id: i64,
    pub reminder: String,
    pub remind_time: DateTime<Utc>,
}
