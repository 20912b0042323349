//! Guild membership event handlers for user lifecycle.

use serenity::all::{Context, GuildId, Member, User};

use crate::bot::handler::Handler;
use crate::data::user::UserRepository;
use crate::model::user::UpsertUserParam;

/// Handles a member joining a guild.
///
/// Upserts the user row so the member has a progress record from day one.
/// Returning members are reactivated and their display name refreshed while
/// accumulated XP and level are preserved.
///
/// # Arguments
/// - `bot` - Event handler state (database, configuration, locks)
/// - `_ctx` - Discord context (unused)
/// - `new_member` - The member that joined
pub async fn handle_guild_member_addition(bot: &Handler, _ctx: Context, new_member: Member) {
    if new_member.user.bot {
        return;
    }

    let user_repo = UserRepository::new(&bot.db);
    let param = UpsertUserParam {
        discord_id: new_member.user.id.get(),
        name: new_member.display_name().to_string(),
    };

    match user_repo.upsert(param).await {
        Ok(user) => {
            tracing::info!("Registered member {} ({})", user.name, user.discord_id);
        }
        Err(e) => {
            tracing::error!(
                "Failed to register member {}: {}",
                new_member.user.id.get(),
                e
            );
        }
    }
}

/// Handles a member leaving a guild.
///
/// Marks the user row inactive instead of deleting it so XP and level survive
/// a rejoin. Unknown users are a no-op.
///
/// # Arguments
/// - `bot` - Event handler state (database, configuration, locks)
/// - `_ctx` - Discord context (unused)
/// - `_guild_id` - Guild the member left (unused)
/// - `user` - The user that left
/// - `_member_data_if_available` - Cached member data, if any (unused)
pub async fn handle_guild_member_removal(
    bot: &Handler,
    _ctx: Context,
    _guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    if user.bot {
        return;
    }

    let user_repo = UserRepository::new(&bot.db);

    if let Err(e) = user_repo.set_active(user.id.get(), false).await {
        tracing::error!("Failed to deactivate member {}: {}", user.id.get(), e);
    }
}
