//! Activity ledger: cooldown and daily-cap enforcement.
//!
//! Decides, per award attempt, whether an activity is creditable right now and
//! records the credit. State lives in the per-user, per-activity-type, per-day
//! counter rows; this module owns the transitions between them.
//!
//! All methods take the current instant as an argument rather than reading the
//! clock, and run against any `ConnectionTrait` impl so the award pipeline can
//! execute them inside its transaction.

use chrono::{DateTime, Utc};
use sea_orm::ConnectionTrait;

use crate::{
    data::daily_activity::DailyActivityRepository,
    error::AppError,
    model::{
        activity::{ActivityType, DailyActivity, InsertDailyActivityParam},
        xp_config::XpConfig,
    },
};

/// Outcome of a credit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum CreditOutcome {
    /// The activity was credited; holds the new or updated row.
    Credited(DailyActivity),
    /// Rejected: the configured cooldown since the last credit has not elapsed.
    OnCooldown,
    /// Rejected: the configured daily cap is already reached.
    DailyCapReached,
}

impl CreditOutcome {
    /// Returns true when the attempt resulted in a credit.
    pub fn is_credited(&self) -> bool {
        matches!(self, CreditOutcome::Credited(_))
    }
}

/// Ledger enforcing per-activity cooldowns and daily caps.
///
/// Holds a reference to the XP configuration; all storage access goes through
/// the connection passed to each call.
pub struct ActivityLedger<'a> {
    config: &'a XpConfig,
}

impl<'a> ActivityLedger<'a> {
    /// Creates a new ActivityLedger over the given configuration.
    ///
    /// # Arguments
    /// - `config` - Reward, cooldown, and cap configuration
    ///
    /// # Returns
    /// - `ActivityLedger` - New ledger instance
    pub fn new(config: &'a XpConfig) -> Self {
        Self { config }
    }

    /// Attempts to credit one occurrence of an activity.
    ///
    /// The per-day row is the state machine:
    ///
    /// - **Absent** - first activity of this type today; always creditable,
    ///   regardless of any configured cooldown. Cooldown measures time since
    ///   the last activity today, which is undefined without a prior one.
    ///   Inserts a new row with `count = 1`.
    /// - **Present, under cooldown** - rejected, no writes.
    /// - **Present, at daily cap** - rejected, no writes.
    /// - **Present, creditable** - increments the row and accumulates `reward`.
    ///
    /// Rejections perform no writes at all, so a rejected attempt never
    /// consumes state.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run against
    /// - `user_id` - Discord ID of the user as u64
    /// - `activity` - Activity type being credited
    /// - `reward` - XP this credit is worth (accumulated on the row)
    /// - `now` - Current instant; its UTC date selects the day row
    ///
    /// # Returns
    /// - `Ok(CreditOutcome)` - Credit decision, with the row when credited
    /// - `Err(AppError::DbErr)` - Database error; no partial writes
    pub async fn try_credit<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: u64,
        activity: ActivityType,
        reward: i32,
        now: DateTime<Utc>,
    ) -> Result<CreditOutcome, AppError> {
        let repo = DailyActivityRepository::new(db);
        let today = now.date_naive();

        let Some(record) = repo.find_for_day(user_id, activity, today).await? else {
            // First activity of this type today
            let record = repo
                .insert(InsertDailyActivityParam {
                    user_id,
                    activity_type: activity,
                    date: today,
                    reward,
                    now,
                })
                .await?;

            return Ok(CreditOutcome::Credited(record));
        };

        let cooldown = self.config.cooldowns.get(&activity).copied().unwrap_or(0);
        if cooldown > 0 {
            let elapsed = (now - record.last_activity).num_seconds();
            if elapsed < cooldown as i64 {
                tracing::debug!(
                    "Cooldown active for user {} activity {}: {}s remaining",
                    user_id,
                    activity,
                    cooldown as i64 - elapsed
                );
                return Ok(CreditOutcome::OnCooldown);
            }
        }

        let daily_limit = self
            .config
            .daily_limits
            .get(&activity)
            .copied()
            .unwrap_or(0);
        if daily_limit > 0 && record.count >= daily_limit {
            tracing::debug!(
                "Daily cap reached for user {} activity {} ({}/{})",
                user_id,
                activity,
                record.count,
                daily_limit
            );
            return Ok(CreditOutcome::DailyCapReached);
        }

        let record = repo.credit(&record, reward, now).await?;

        Ok(CreditOutcome::Credited(record))
    }

    /// Checks whether the daily login bonus has already been claimed today.
    ///
    /// Daily login ignores cooldown and cap configuration entirely; it is
    /// purely once per UTC day, queried directly rather than through the
    /// generic credit path.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run against
    /// - `user_id` - Discord ID of the user as u64
    /// - `now` - Current instant; its UTC date selects the day row
    ///
    /// # Returns
    /// - `Ok(true)` - A DailyLogin row with `count > 0` exists today
    /// - `Ok(false)` - Not yet claimed today
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn daily_login_claimed<C: ConnectionTrait>(
        &self,
        db: &C,
        user_id: u64,
        now: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let repo = DailyActivityRepository::new(db);
        let record = repo
            .find_for_day(user_id, ActivityType::DailyLogin, now.date_naive())
            .await?;

        Ok(record.map(|r| r.count > 0).unwrap_or(false))
    }
}
