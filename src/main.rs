use std::env;
use std::sync::Arc;

use serenity::model::gateway::GatewayIntents;
use serenity::model::id::{GuildId, UserId};
use serenity::prelude::*;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use exodus_bot::commands::games::engine::GameManager;
use exodus_bot::model::{AppState, ShardManagerContainer};
use exodus_bot::{database, handler};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
    let guild_id = env::var("GUILD_ID")
        .expect("Expected GUILD_ID in the environment.")
        .parse::<u64>()
        .map(GuildId::new)
        .expect("GUILD_ID must be a valid number.");
    let database_url = env::var("DATABASE_URL").expect("Expected DATABASE_URL in the environment.");
    let owner_id = env::var("OWNER_ID")
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .map(UserId::new);

    let db = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Error connecting to the database.");
    database::init::create_tables(&db)
        .await
        .expect("Error creating database tables.");

    let app_state = Arc::new(AppState {
        game_manager: Arc::new(RwLock::new(GameManager::new())),
        db,
        http_client: reqwest::Client::new(),
        opencage_api_key: env::var("OPENCAGE_API_KEY").ok(),
        openweathermap_api_key: env::var("OPENWEATHERMAP_API_KEY").ok(),
        owner_id,
    });

    // Slash commands only; no privileged message-content intent is needed.
    let intents = GatewayIntents::GUILDS;

    let mut client = Client::builder(&token, intents)
        .event_handler(handler::Handler::new(guild_id))
        .await
        .expect("Error creating the Discord client.");

    {
        let mut data = client.data.write().await;
        data.insert::<ShardManagerContainer>(client.shard_manager.clone());
        data.insert::<AppState>(app_state);
    }

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Error registering the ctrl-c handler.");
        tracing::info!(target = "startup", "ctrl-c received; shutting down shards");
        shard_manager.shutdown_all().await;
    });

    if let Err(why) = client.start().await {
        tracing::error!(target = "startup", error = ?why, "client error");
    }
}
