//! Daily activity factory for creating test activity counter entities.
//!
//! This module provides factory methods for creating daily activity rows with
//! sensible defaults. Rows default to a single credited `Message` occurrence
//! on today's UTC date.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test daily activity rows with customizable fields.
///
/// Provides a builder pattern for creating daily activity entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::daily_activity::DailyActivityFactory;
///
/// let activity = DailyActivityFactory::new(&db, &user.discord_id)
///     .activity_type("Reaction")
///     .count(3)
///     .build()
///     .await?;
/// ```
pub struct DailyActivityFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    activity_type: String,
    date: NaiveDate,
    count: i32,
    total_xp_awarded: i32,
    last_activity: DateTime<Utc>,
}

impl<'a> DailyActivityFactory<'a> {
    /// Creates a new DailyActivityFactory with default values.
    ///
    /// Defaults:
    /// - activity_type: `"Message"`
    /// - date: today's UTC date
    /// - count: `1`
    /// - total_xp_awarded: `0`
    /// - last_activity: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Discord ID of the owning user as string
    ///
    /// # Returns
    /// - `DailyActivityFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            db,
            user_id: user_id.into(),
            activity_type: "Message".to_string(),
            date: now.date_naive(),
            count: 1,
            total_xp_awarded: 0,
            last_activity: now,
        }
    }

    /// Sets the activity type name for the row.
    ///
    /// # Arguments
    /// - `activity_type` - Activity type name (e.g. `"Message"`, `"DailyLogin"`)
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn activity_type(mut self, activity_type: impl Into<String>) -> Self {
        self.activity_type = activity_type.into();
        self
    }

    /// Sets the UTC calendar date for the row.
    ///
    /// # Arguments
    /// - `date` - UTC calendar day
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the credited occurrence count for the row.
    ///
    /// # Arguments
    /// - `count` - Number of credited occurrences
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    /// Sets the cumulative XP awarded today for the row.
    ///
    /// # Arguments
    /// - `total_xp_awarded` - XP awarded for this type today
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn total_xp_awarded(mut self, total_xp_awarded: i32) -> Self {
        self.total_xp_awarded = total_xp_awarded;
        self
    }

    /// Sets the timestamp of the last credited occurrence.
    ///
    /// # Arguments
    /// - `last_activity` - Timestamp of the last credit
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn last_activity(mut self, last_activity: DateTime<Utc>) -> Self {
        self.last_activity = last_activity;
        self
    }

    /// Builds and inserts the daily activity entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::daily_activity::Model)` - Created daily activity entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::daily_activity::Model, DbErr> {
        entity::daily_activity::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            activity_type: ActiveValue::Set(self.activity_type),
            date: ActiveValue::Set(self.date),
            count: ActiveValue::Set(self.count),
            total_xp_awarded: ActiveValue::Set(self.total_xp_awarded),
            last_activity: ActiveValue::Set(self.last_activity),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a daily activity row with default values for the given user.
///
/// Shorthand for `DailyActivityFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Discord ID of the owning user as string
///
/// # Returns
/// - `Ok(entity::daily_activity::Model)` - Created daily activity entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_activity(
    db: &DatabaseConnection,
    user_id: impl Into<String>,
) -> Result<entity::daily_activity::Model, DbErr> {
    DailyActivityFactory::new(db, user_id).build().await
}
