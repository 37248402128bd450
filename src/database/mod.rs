//! Central hub for all database-related logic. Submodules are accessed via
//! their full path, e.g. `database::reminders::create_reminder`.

pub mod init;
pub mod models;
pub mod reminders;
pub mod users;
