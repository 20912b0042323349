mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::service::level::LevelSystem;
use crate::service::voice::VoiceTracker;
use crate::service::xp::UserLocks;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let xp_config = Arc::new(startup::load_xp_config(&config, &db).await?);
    let levels = Arc::new(LevelSystem::new((*xp_config).clone()));
    let voice = VoiceTracker::new();
    let locks = UserLocks::new();

    tracing::info!("Starting levelboard");

    // Start activity retention scheduler
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = scheduler::activity_cleanup::start_scheduler(scheduler_db).await {
            tracing::error!("Activity retention scheduler error: {}", e);
        }
    });

    // Initialize Discord bot and extract HTTP client
    let (bot_client, _discord_http) =
        bot::start::init_bot(&config, db, xp_config, levels, voice, locks).await?;

    // Start Discord bot in a separate task
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");

    Ok(())
}
