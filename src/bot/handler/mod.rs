use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, GuildId, Member, Message, Reaction, Ready, User, VoiceState,
};
use serenity::async_trait;

use crate::{
    model::xp_config::XpConfig,
    service::{level::LevelSystem, voice::VoiceTracker, xp::UserLocks},
};

pub mod member;
pub mod message;
pub mod reaction;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub xp_config: Arc<XpConfig>,
    pub levels: Arc<LevelSystem>,
    pub voice: VoiceTracker,
    pub locks: UserLocks,
}

impl Handler {
    pub fn new(
        db: DatabaseConnection,
        xp_config: Arc<XpConfig>,
        levels: Arc<LevelSystem>,
        voice: VoiceTracker,
        locks: UserLocks,
    ) -> Self {
        Self {
            db,
            xp_config,
            levels,
            voice,
            locks,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self, ctx, message).await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        reaction::handle_reaction_add(self, ctx, reaction).await;
    }

    /// Called when a user's voice state changes (join, leave, move)
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(self, ctx, old, new).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(self, ctx, new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(self, ctx, guild_id, user, member_data_if_available)
            .await;
    }
}
