//! Voice session tracking.
//!
//! Tracks when users join voice channels so that, on leave, the elapsed time
//! can be converted into per-minute XP awards. Sessions live in memory only:
//! a restart forgets in-flight sessions, and the tracker assumes a single bot
//! instance. Both methods take the current instant as an argument so tests
//! control the clock.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// In-memory tracker of active voice sessions keyed by Discord user ID.
///
/// Cheap to clone; clones share the same session map.
#[derive(Clone)]
pub struct VoiceTracker {
    sessions: Arc<RwLock<HashMap<u64, DateTime<Utc>>>>,
}

impl VoiceTracker {
    /// Creates a new tracker with no active sessions.
    ///
    /// # Returns
    /// - `VoiceTracker` - New tracker instance
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Records that a user joined a voice channel.
    ///
    /// Rejoining while already tracked restarts the session; time before the
    /// rejoin is not credited.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `now` - Join instant
    pub async fn on_join(&self, user_id: u64, now: DateTime<Utc>) {
        self.sessions.write().await.insert(user_id, now);
    }

    /// Records that a user left a voice channel.
    ///
    /// Ends the session and returns the number of whole minutes it lasted.
    /// Returns 0 for users with no tracked session (for example when the bot
    /// restarted mid-session).
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    /// - `now` - Leave instant
    ///
    /// # Returns
    /// - `i64` - Whole minutes elapsed since the tracked join, or 0
    pub async fn on_leave(&self, user_id: u64, now: DateTime<Utc>) -> i64 {
        let Some(joined_at) = self.sessions.write().await.remove(&user_id) else {
            return 0;
        };

        (now - joined_at).num_minutes().max(0)
    }
}

impl Default for VoiceTracker {
    fn default() -> Self {
        Self::new()
    }
}
