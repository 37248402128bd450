//! Background tasks: the reminder delivery loop and the game-session sweeper.
//!
//! Delivery is at-least-once by design: a due reminder is sent first and its
//! row deleted afterwards, with no transaction spanning the two steps. A crash
//! between send and delete re-delivers the reminder on the next tick after
//! restart. A send failure (recipient unreachable, DMs closed) is logged and
//! the row is deleted anyway, so that reminder is lost rather than retried
//! forever. Exactly one reminder loop may run per process; `Handler` guards
//! the spawn.

use crate::commands::games::engine::GameManager;
use crate::constants::{REMINDER_POLL_INTERVAL_SECS, SESSION_SWEEP_INTERVAL_SECS};
use crate::database;
use chrono::Utc;
use serenity::http::Http;
use serenity::model::id::UserId;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Polls the reminder table once a second and delivers everything due.
pub async fn run_reminder_loop(http: Arc<Http>, db: PgPool) {
    let mut ticker = tokio::time::interval(Duration::from_secs(REMINDER_POLL_INTERVAL_SECS));
    tracing::info!(target = "scheduler", "reminder loop started");
    loop {
        ticker.tick().await;
        let now = Utc::now();
        let due = match database::reminders::due_reminders(&db, now).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(target = "scheduler", error = %e, "failed to fetch due reminders");
                continue;
            }
        };
        for reminder in due {
            deliver(&http, &db, reminder).await;
        }
    }
}

async fn deliver(http: &Arc<Http>, db: &PgPool, reminder: database::models::Reminder) {
    let user = UserId::new(reminder.user_id as u64);
    let send_result = match user.create_dm_channel(http).await {
        Ok(dm) => {
            dm.id
                .say(http, format!("⏰ Reminder: {}", reminder.reminder))
                .await
        }
        Err(e) => Err(e),
    };
    if let Err(e) = send_result {
        tracing::warn!(
            target = "scheduler",
            user_id = reminder.user_id,
            error = %e,
            "reminder delivery failed; dropping the reminder"
        );
    }
    // Deleted regardless of send success. See the module docs.
    match database::reminders::delete_reminder(db, reminder.user_id, &reminder.reminder, reminder.remind_time).await
    {
        Ok(removed) => {
            tracing::debug!(
                target = "scheduler",
                user_id = reminder.user_id,
                rows = removed,
                "reminder delivered and cleared"
            );
        }
        Err(e) => {
            tracing::error!(
                target = "scheduler",
                user_id = reminder.user_id,
                error = %e,
                "failed to delete delivered reminder; it will fire again"
            );
        }
    }
}

/// Periodically drops game sessions that sat idle past the timeout.
pub async fn run_session_sweeper(game_manager: Arc<RwLock<GameManager>>) {
    let mut ticker = tokio::time::interval(Duration::from_secs(SESSION_SWEEP_INTERVAL_SECS));
    loop {
        ticker.tick().await;
        let swept = game_manager.write().await.sweep_idle();
        for key in swept {
            tracing::debug!(
                target = "games.session",
                user_id = key.user.get(),
                channel_id = key.channel.get(),
                "abandoned idle game session"
            );
        }
    }
}
