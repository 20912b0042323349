//! Voice state event handler for voice session tracking.

use chrono::Utc;
use serenity::all::{Context, VoiceState};

use crate::bot::handler::Handler;
use crate::model::activity::ActivityType;
use crate::service::{notify::DiscordNotifier, xp::XpService};

/// Handles voice state changes for voice session XP.
///
/// Joining a voice channel opens a tracked session and counts as platform
/// contact for the daily login bonus. Leaving closes the session and awards
/// one voice-minute activity per whole minute spent connected, which lets the
/// per-activity daily cap apply minute by minute. Moving between channels
/// keeps the session open.
///
/// # Arguments
/// - `bot` - Event handler state (database, configuration, locks)
/// - `ctx` - Discord context providing the HTTP client for notifications
/// - `old` - Previous voice state, if the user was already tracked
/// - `new` - New voice state after the change
pub async fn handle_voice_state_update(
    bot: &Handler,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    if new.member.as_ref().is_some_and(|member| member.user.bot) {
        return;
    }

    let user_id = new.user_id.get();
    let was_connected = old.as_ref().is_some_and(|state| state.channel_id.is_some());
    let now = Utc::now();

    let notifier = DiscordNotifier::new(ctx.http.clone());
    let xp_service = XpService::new(
        &bot.db,
        &bot.xp_config,
        &bot.levels,
        &notifier,
        &bot.locks,
    );

    if new.channel_id.is_some() && !was_connected {
        bot.voice.on_join(user_id, now).await;

        if let Err(e) = xp_service.check_and_award_daily_login(user_id).await {
            tracing::error!("Failed to award daily login for user {}: {}", user_id, e);
        }
        return;
    }

    if new.channel_id.is_none() && was_connected {
        let minutes = bot.voice.on_leave(user_id, now).await;

        for _ in 0..minutes {
            match xp_service.award_activity(user_id, ActivityType::VoiceMinute).await {
                // Daily cap or cooldown reached, remaining minutes earn nothing
                Ok(false) => break,
                Ok(true) => {}
                Err(e) => {
                    tracing::error!("Failed to award voice XP for user {}: {}", user_id, e);
                    break;
                }
            }
        }
    }
}
