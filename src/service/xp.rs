//! XP award orchestration.
//!
//! This module provides the `XpService`, the entry point for every XP-earning
//! event. It loads the user, asks the activity ledger whether the event is
//! creditable, applies the reward, detects level-ups, and notifies the user.
//! The ledger credit and the user's XP/level update commit in a single
//! transaction, so a storage failure can never consume a daily slot without
//! granting the XP that goes with it.
//!
//! Concurrent events for the same user (messages, reactions, voice timers)
//! are serialized through `UserLocks`, closing the read-modify-write race on
//! the per-day counter rows. Single-instance deployment is assumed, as with
//! the voice tracker.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tokio::sync::Mutex;

use crate::{
    data::{daily_activity::DailyActivityRepository, user::UserRepository},
    error::AppError,
    model::{
        activity::{ActivityType, DailyActivity},
        user::UserProgress,
        xp_config::XpConfig,
    },
    service::{ledger::ActivityLedger, level::LevelSystem, notify::LevelUpNotifier},
};

/// Per-user mutex map serializing the award pipeline.
///
/// Cheap to clone; clones share the same lock map. Lock entries are created on
/// first use and live for the lifetime of the process.
#[derive(Clone)]
pub struct UserLocks {
    locks: Arc<Mutex<HashMap<u64, Arc<Mutex<()>>>>>,
}

impl UserLocks {
    /// Creates a new empty lock map.
    ///
    /// # Returns
    /// - `UserLocks` - New lock map instance
    pub fn new() -> Self {
        Self {
            locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Gets the lock for a user, creating it on first use.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user
    ///
    /// # Returns
    /// - `Arc<Mutex<()>>` - The user's lock; hold its guard across the pipeline
    pub async fn acquire(&self, user_id: u64) -> Arc<Mutex<()>> {
        self.locks
            .lock()
            .await
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

impl Default for UserLocks {
    fn default() -> Self {
        Self::new()
    }
}

/// Service orchestrating the XP award pipeline and progress queries.
///
/// Constructed per event from shared pieces, like the repositories it uses.
pub struct XpService<'a, N: LevelUpNotifier> {
    db: &'a DatabaseConnection,
    config: &'a XpConfig,
    levels: &'a LevelSystem,
    notifier: &'a N,
    locks: &'a UserLocks,
}

impl<'a, N: LevelUpNotifier> XpService<'a, N> {
    /// Creates a new XpService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - XP reward configuration
    /// - `levels` - Level curve calculator built over the same configuration
    /// - `notifier` - Level-up notification sink
    /// - `locks` - Shared per-user lock map
    ///
    /// # Returns
    /// - `XpService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        config: &'a XpConfig,
        levels: &'a LevelSystem,
        notifier: &'a N,
        locks: &'a UserLocks,
    ) -> Self {
        Self {
            db,
            config,
            levels,
            notifier,
            locks,
        }
    }

    /// Awards XP for one occurrence of an activity.
    ///
    /// Runs the full pipeline: load user, credit the ledger, apply the reward,
    /// evaluate the level curve, persist, notify on level-up. Unknown users
    /// are silently ignored (they must register first). An activity configured
    /// with zero reward still consumes the user's ledger slot but grants no
    /// XP and returns false; this mirrors the platform's longstanding order
    /// of operations.
    ///
    /// Notification failures are logged and never fail the award.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user as u64
    /// - `activity` - Activity type being credited
    ///
    /// # Returns
    /// - `Ok(true)` - XP granted
    /// - `Ok(false)` - Not creditable (unknown user, cooldown, cap, zero reward)
    /// - `Err(AppError::DbErr)` - Storage failure; nothing was committed
    pub async fn award_activity(
        &self,
        user_id: u64,
        activity: ActivityType,
    ) -> Result<bool, AppError> {
        let lock = self.locks.acquire(user_id).await;
        let _guard = lock.lock().await;

        self.award_locked(user_id, activity).await
    }

    /// Awards the once-per-day login bonus if not yet claimed today.
    ///
    /// The claim check ignores cooldown and cap configuration entirely; it is
    /// a direct query for today's DailyLogin row, taken under the same
    /// per-user lock as the award so two concurrent logins cannot both claim.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user as u64
    ///
    /// # Returns
    /// - `Ok(true)` - Bonus granted
    /// - `Ok(false)` - Already claimed today, or user unknown
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn check_and_award_daily_login(&self, user_id: u64) -> Result<bool, AppError> {
        let lock = self.locks.acquire(user_id).await;
        let _guard = lock.lock().await;

        let ledger = ActivityLedger::new(self.config);
        if ledger
            .daily_login_claimed(self.db, user_id, Utc::now())
            .await?
        {
            return Ok(false);
        }

        tracing::debug!("Granting daily login bonus to user {}", user_id);
        self.award_locked(user_id, ActivityType::DailyLogin).await
    }

    /// Returns a user's level, XP, and the next level's XP threshold.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user as u64
    ///
    /// # Returns
    /// - `Ok(UserProgress)` - Progress data; all zeros for unknown users
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn get_user_progress(&self, user_id: u64) -> Result<UserProgress, AppError> {
        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_discord_id(user_id).await? else {
            return Ok(UserProgress {
                level: 0,
                xp: 0,
                required_xp: 0,
            });
        };

        Ok(UserProgress {
            level: user.level,
            xp: user.experience,
            required_xp: self.levels.required_xp(user.level),
        })
    }

    /// Returns today's credited occurrence counts per activity type.
    ///
    /// Every activity type is present in the result, defaulting to 0 when no
    /// row exists today. Unknown users yield an empty map.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user as u64
    ///
    /// # Returns
    /// - `Ok(HashMap<ActivityType, i32>)` - Today's counts by activity type
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn get_user_activity_stats(
        &self,
        user_id: u64,
    ) -> Result<HashMap<ActivityType, i32>, AppError> {
        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_discord_id(user_id).await?.is_none() {
            return Ok(HashMap::new());
        }

        let ledger_repo = DailyActivityRepository::new(self.db);
        let today: Vec<DailyActivity> = ledger_repo
            .find_all_for_day(user_id, Utc::now().date_naive())
            .await?;

        let mut stats: HashMap<ActivityType, i32> =
            ActivityType::ALL.iter().map(|t| (*t, 0)).collect();
        for record in today {
            stats.insert(record.activity_type, record.count);
        }

        Ok(stats)
    }

    /// Award pipeline body; the caller holds the user's lock.
    async fn award_locked(&self, user_id: u64, activity: ActivityType) -> Result<bool, AppError> {
        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_discord_id(user_id).await? else {
            tracing::debug!("Skipping XP for unregistered user {}", user_id);
            return Ok(false);
        };

        let now = Utc::now();
        let reward = self.levels.reward_for(activity);
        let ledger = ActivityLedger::new(self.config);

        // Ledger credit and progress update commit together
        let txn = self.db.begin().await?;

        let outcome = ledger
            .try_credit(&txn, user_id, activity, reward, now)
            .await?;
        if !outcome.is_credited() {
            txn.rollback().await?;
            return Ok(false);
        }

        if reward <= 0 {
            // Slot is consumed even though no XP is granted
            txn.commit().await?;
            tracing::debug!(
                "No reward configured for activity {} (user {})",
                activity,
                user_id
            );
            return Ok(false);
        }

        let experience = user.experience + reward;
        let (new_level, did_level_up) = self.levels.evaluate_level(user.level, experience);

        UserRepository::new(&txn)
            .update_progress(user_id, experience, new_level)
            .await?;

        txn.commit().await?;

        if did_level_up {
            tracing::info!("User {} leveled up to {}", user_id, new_level);
            if let Err(e) = self.notifier.send_level_up(user_id, new_level).await {
                tracing::warn!("Failed to send level-up message to {}: {}", user_id, e);
            }
        }

        Ok(true)
    }
}
