//! XP reward override repository.
//!
//! This module provides the `XpRewardRepository` for reading and writing the
//! database-backed reward configuration overrides. Rows are read once at
//! startup and overlaid onto the static XP configuration; the admin surface
//! that edits them lives outside this crate.

use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait};

use crate::error::AppError;

/// Repository providing database operations for XP reward overrides.
pub struct XpRewardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> XpRewardRepository<'a, C> {
    /// Creates a new XpRewardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `XpRewardRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all reward override rows.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All override rows (empty if none configured)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::xp_reward::Model>, AppError> {
        let entities = entity::prelude::XpReward::find().all(self.db).await?;

        Ok(entities)
    }

    /// Upserts a reward override row by activity type name.
    ///
    /// # Arguments
    /// - `name` - Activity type name the override applies to
    /// - `reward` - XP granted per credited occurrence
    /// - `cooldown` - Cooldown in seconds (0 = none)
    /// - `daily_limit` - Daily cap (0 = unlimited)
    ///
    /// # Returns
    /// - `Ok(())` - Override created or updated
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        name: &str,
        reward: i32,
        cooldown: i32,
        daily_limit: i32,
    ) -> Result<(), AppError> {
        entity::prelude::XpReward::insert(entity::xp_reward::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            reward: ActiveValue::Set(reward),
            cooldown: ActiveValue::Set(cooldown),
            daily_limit: ActiveValue::Set(daily_limit),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::xp_reward::Column::Name)
                .update_columns([
                    entity::xp_reward::Column::Reward,
                    entity::xp_reward::Column::Cooldown,
                    entity::xp_reward::Column::DailyLimit,
                ])
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }
}
