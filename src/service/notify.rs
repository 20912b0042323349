//! Level-up notification delivery.
//!
//! Defines the `LevelUpNotifier` seam between the award pipeline and Discord.
//! Notification delivery is best effort: the pipeline logs failures (for
//! example a user with DMs closed) and never fails an award over them. Test
//! doubles implement the trait alongside the service tests.

use std::sync::Arc;

use serenity::async_trait;
use serenity::http::Http;
use serenity::model::id::UserId;

use crate::error::AppError;

/// Sends a level-up message to the user who leveled up.
#[async_trait]
pub trait LevelUpNotifier: Send + Sync {
    /// Sends a level-up notification.
    ///
    /// # Arguments
    /// - `discord_id` - Discord ID of the user who leveled up
    /// - `new_level` - The level they just reached
    ///
    /// # Returns
    /// - `Ok(())` - Notification delivered
    /// - `Err(AppError)` - Delivery failed; callers log and continue
    async fn send_level_up(&self, discord_id: u64, new_level: i32) -> Result<(), AppError>;
}

/// Notifier that DMs the user through the Discord API.
#[derive(Clone)]
pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    /// Creates a new DiscordNotifier.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client for bot API operations
    ///
    /// # Returns
    /// - `DiscordNotifier` - New notifier instance
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl LevelUpNotifier for DiscordNotifier {
    async fn send_level_up(&self, discord_id: u64, new_level: i32) -> Result<(), AppError> {
        let channel = UserId::new(discord_id)
            .create_dm_channel(&self.http)
            .await?;

        channel
            .say(
                &self.http,
                format!("Congratulations! You reached level {}! 🎉", new_level),
            )
            .await?;

        Ok(())
    }
}
