//! Daily activity data repository for database operations.
//!
//! This module provides the `DailyActivityRepository` for managing the per-user,
//! per-activity-type, per-day counter rows that back cooldown and daily-cap
//! decisions. At most one row exists per `(user, activity type, day)`; a new day
//! creates a new row rather than mutating the prior one, so historical daily
//! totals are immutable once the day rolls over.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::{
    error::AppError,
    model::activity::{ActivityType, DailyActivity, InsertDailyActivityParam},
};

/// Repository providing database operations for daily activity counters.
///
/// This struct holds a reference to a database connection (or transaction) and
/// provides methods for reading, crediting, and sweeping activity rows.
pub struct DailyActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DailyActivityRepository<'a, C> {
    /// Creates a new DailyActivityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `DailyActivityRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the activity row for a user, activity type, and calendar day.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user as u64
    /// - `activity_type` - Activity type to look up
    /// - `date` - UTC calendar day
    ///
    /// # Returns
    /// - `Ok(Some(DailyActivity))` - Row found for that day
    /// - `Ok(None)` - No activity of this type credited that day
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_for_day(
        &self,
        user_id: u64,
        activity_type: ActivityType,
        date: NaiveDate,
    ) -> Result<Option<DailyActivity>, AppError> {
        let entity = entity::prelude::DailyActivity::find()
            .filter(entity::daily_activity::Column::UserId.eq(user_id.to_string()))
            .filter(entity::daily_activity::Column::ActivityType.eq(activity_type.as_str()))
            .filter(entity::daily_activity::Column::Date.eq(date))
            .one(self.db)
            .await?;

        entity.map(DailyActivity::from_entity).transpose()
    }

    /// Finds all activity rows for a user on a calendar day.
    ///
    /// Used by the activity stats query to report today's counts across all
    /// activity types.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user as u64
    /// - `date` - UTC calendar day
    ///
    /// # Returns
    /// - `Ok(Vec<DailyActivity>)` - All rows for that day (empty if none)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_all_for_day(
        &self,
        user_id: u64,
        date: NaiveDate,
    ) -> Result<Vec<DailyActivity>, AppError> {
        let entities = entity::prelude::DailyActivity::find()
            .filter(entity::daily_activity::Column::UserId.eq(user_id.to_string()))
            .filter(entity::daily_activity::Column::Date.eq(date))
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(DailyActivity::from_entity)
            .collect()
    }

    /// Inserts the first activity row of a day with a single credit.
    ///
    /// The new row starts at `count = 1` with the first reward already
    /// accumulated, so the insert itself is the credit.
    ///
    /// # Arguments
    /// - `param` - Insert parameters including user, type, day, reward, and timestamp
    ///
    /// # Returns
    /// - `Ok(DailyActivity)` - The created row
    /// - `Err(AppError::DbErr)` - Database error during insert (including unique
    ///   index conflicts when a concurrent insert won the race)
    pub async fn insert(
        &self,
        param: InsertDailyActivityParam,
    ) -> Result<DailyActivity, AppError> {
        let entity = entity::prelude::DailyActivity::insert(entity::daily_activity::ActiveModel {
            user_id: ActiveValue::Set(param.user_id.to_string()),
            activity_type: ActiveValue::Set(param.activity_type.as_str().to_string()),
            date: ActiveValue::Set(param.date),
            count: ActiveValue::Set(1),
            total_xp_awarded: ActiveValue::Set(param.reward),
            last_activity: ActiveValue::Set(param.now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        DailyActivity::from_entity(entity)
    }

    /// Credits one more occurrence on an existing activity row.
    ///
    /// Increments the count, accumulates the reward, and moves the
    /// last-activity timestamp forward. The caller has already decided the
    /// credit is allowed; rejected attempts never reach this method.
    ///
    /// # Arguments
    /// - `record` - The current row as previously read
    /// - `reward` - XP awarded by this credit
    /// - `now` - Timestamp of this credit
    ///
    /// # Returns
    /// - `Ok(DailyActivity)` - The updated row
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn credit(
        &self,
        record: &DailyActivity,
        reward: i32,
        now: DateTime<Utc>,
    ) -> Result<DailyActivity, AppError> {
        let entity = entity::daily_activity::ActiveModel {
            id: ActiveValue::Unchanged(record.id),
            count: ActiveValue::Set(record.count + 1),
            total_xp_awarded: ActiveValue::Set(record.total_xp_awarded + reward),
            last_activity: ActiveValue::Set(now),
            ..Default::default()
        };

        let updated = sea_orm::ActiveModelTrait::update(entity, self.db).await?;

        DailyActivity::from_entity(updated)
    }

    /// Deletes activity rows older than the cutoff day.
    ///
    /// Used by the retention sweep. Rows dated exactly on the cutoff are kept,
    /// so a cutoff comfortably in the past can never touch a row being written
    /// for today.
    ///
    /// # Arguments
    /// - `cutoff` - UTC calendar day; rows strictly older are removed
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_older_than(&self, cutoff: NaiveDate) -> Result<u64, AppError> {
        let result = entity::prelude::DailyActivity::delete_many()
            .filter(entity::daily_activity::Column::Date.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
