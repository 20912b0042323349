//! Message event handler for XP awards.

use serenity::all::{Context, Message};

use crate::bot::handler::Handler;
use crate::model::activity::ActivityType;
use crate::service::{notify::DiscordNotifier, xp::XpService};

/// Handles message creation in a guild channel.
///
/// A message is the user's most common XP-earning activity and also counts as
/// platform contact for the daily login bonus. Bot accounts and DMs are
/// ignored. Award failures are logged and swallowed; a failed award is silent
/// to the end user.
///
/// # Arguments
/// - `bot` - Event handler state (database, configuration, locks)
/// - `ctx` - Discord context providing the HTTP client for notifications
/// - `message` - The message that was created
pub async fn handle_message(bot: &Handler, ctx: Context, message: Message) {
    // Only award XP for messages in guild channels (not DMs)
    if message.author.bot || message.guild_id.is_none() {
        return;
    }

    let user_id = message.author.id.get();

    let notifier = DiscordNotifier::new(ctx.http.clone());
    let xp_service = XpService::new(
        &bot.db,
        &bot.xp_config,
        &bot.levels,
        &notifier,
        &bot.locks,
    );

    if let Err(e) = xp_service.check_and_award_daily_login(user_id).await {
        tracing::error!("Failed to award daily login for user {}: {}", user_id, e);
    }

    if let Err(e) = xp_service
        .award_activity(user_id, ActivityType::Message)
        .await
    {
        tracing::error!("Failed to award message XP for user {}: {}", user_id, e);
    }
}
