//! Thin clients for the third-party HTTP services the bot depends on.

pub mod geocode;
pub mod weather;
