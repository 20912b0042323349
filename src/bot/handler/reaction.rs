//! Reaction event handler for XP awards.

use serenity::all::{Context, Reaction};

use crate::bot::handler::Handler;
use crate::model::activity::ActivityType;
use crate::service::{notify::DiscordNotifier, xp::XpService};

/// Handles a reaction being added to a message.
///
/// Reactions count as platform contact for the daily login bonus and earn
/// their own (typically small) reward. Reactions outside guilds and events
/// without a user ID are ignored.
///
/// # Arguments
/// - `bot` - Event handler state (database, configuration, locks)
/// - `ctx` - Discord context providing the HTTP client for notifications
/// - `reaction` - The reaction that was added
pub async fn handle_reaction_add(bot: &Handler, ctx: Context, reaction: Reaction) {
    if reaction.guild_id.is_none() {
        return;
    }

    let Some(user_id) = reaction.user_id.map(|id| id.get()) else {
        return;
    };

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
        .award_activity(user_id, ActivityType::Reaction)
        .await
    {
        tracing::error!("Failed to award reaction XP for user {}: {}", user_id, e);
    }
}
