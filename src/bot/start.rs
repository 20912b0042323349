use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents, Http};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::model::xp_config::XpConfig;
use crate::service::level::LevelSystem;
use crate::service::voice::VoiceTracker;
use crate::service::xp::UserLocks;

/// Initializes the Discord bot client and extracts its HTTP client
///
/// Builds the client without starting it so the HTTP handle can be shared
/// with other components (for example the level-up notifier) before the
/// gateway connection is established.
///
/// The bot requires a DISCORD_TOKEN environment variable to be set.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection for the bot to use
/// - `xp_config` - Activity reward configuration
/// - `levels` - Level curve shared with the award pipeline
/// - `voice` - Voice session tracker shared across events
/// - `locks` - Per-user award locks shared across events
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` with the unstarted client and its HTTP handle
/// - `Err(AppError)` if client construction fails
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    xp_config: Arc<XpConfig>,
    levels: Arc<LevelSystem>,
    voice: VoiceTracker,
    locks: UserLocks,
) -> Result<(Client, Arc<Http>), AppError> {
    // Configure gateway intents - what events the bot will receive
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(db, xp_config, levels, voice, locks);

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner
///
/// This function starts a previously initialized Discord bot client. It should
/// be called from within a tokio::spawn task since it will block until the bot
/// shuts down.
///
/// # Arguments
/// - `client` - The initialized Discord client from `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
