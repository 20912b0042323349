//! Discord bot integration for XP-earning activity events.
//!
//! This module provides the Discord bot functionality for the application. The
//! bot listens for member activity (messages, reactions, voice sessions) and
//! feeds it into the XP award pipeline, and keeps user rows in sync with guild
//! membership.
//!
//! The bot is initialized during startup and runs in its own tokio task. Its
//! HTTP client is shared with the level-up notifier so DMs go out without a
//! second Discord connection.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guild availability
//! - `GUILD_MESSAGES` - Receive events about messages in guilds
//! - `GUILD_MESSAGE_REACTIONS` - Receive events about reactions in guilds
//! - `GUILD_VOICE_STATES` - Receive voice join/leave events
//! - `GUILD_MEMBERS` - Receive events about guild member changes (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
