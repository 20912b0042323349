use serenity::async_trait;
use tokio::sync::Mutex;

use crate::data::user::UserRepository;
use crate::error::AppError;
use crate::model::activity::ActivityType;
use crate::model::xp_config::XpConfig;
use crate::service::level::LevelSystem;
use crate::service::notify::LevelUpNotifier;
use crate::service::xp::{UserLocks, XpService};
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod award_activity;
mod get_user_activity_stats;

/// Notifier double that records level-up notifications in memory.
struct RecordingNotifier {
    sent: Mutex<Vec<(u64, i32)>>,
    fail: bool,
}

impl RecordingNotifier {
    fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A notifier whose deliveries always fail, like a user with DMs closed.
    fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    async fn notifications(&self) -> Vec<(u64, i32)> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl LevelUpNotifier for RecordingNotifier {
    async fn send_level_up(&self, discord_id: u64, new_level: i32) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::IoErr(std::io::Error::other("delivery failed")));
        }
        self.sent.lock().await.push((discord_id, new_level));
        Ok(())
    }
}
