//! This module defines the shared data structures used throughout the application.
//! These structs are used as `TypeMapKey`s to store shared state in Serenity's global context.

use crate::commands::games::engine::GameManager;
use serenity::gateway::ShardManager;
use serenity::model::id::UserId;
use serenity::prelude::{Context, TypeMapKey};
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A container for the ShardManager, allowing it to be stored in the global context.
/// This provides access to shard-specific information, like gateway latency, and
/// lets the owner-only shutdown command stop all shards gracefully.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// The central, shared state of the application.
/// An `Arc<AppState>` is stored in the global context for easy and safe access
/// from any command or event handler. Constructed once on startup; everything
/// it owns is dropped when the process exits.
pub struct AppState {
    /// The manager for all active game sessions (Blackjack, Poker, Roulette).
    /// This is the single point of entry for all game-related logic.
    pub game_manager: Arc<RwLock<GameManager>>,
    /// The connection pool for the PostgreSQL database.
    pub db: PgPool,
    /// A shared HTTP client for the geocoding and weather services.
    pub http_client: reqwest::Client,
    /// API key for the OpenCage geocoder. Weather replies degrade gracefully when unset.
    pub opencage_api_key: Option<String>,
    /// API key for OpenWeatherMap. Weather replies degrade gracefully when unset.
    pub openweathermap_api_key: Option<String>,
    /// The bot owner, allowed to run `/shutdown`.
    pub owner_id: Option<UserId>,
}

impl AppState {
    /// Fetches the shared state out of Serenity's TypeMap.
    ///
    /// Panics if the state was never inserted, which would be a startup bug.
    pub async fn from_ctx(ctx: &Context) -> Arc<AppState> {
        ctx.data
            .read()
            .await
            .get::<AppState>()
            .expect("Expected AppState in TypeMap.")
            .clone()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}
