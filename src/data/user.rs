//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, lookups, XP/level progress updates, and soft-deactivation
//! with proper conversion between entity models and domain models at the infrastructure
//! boundary.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::{
    error::AppError,
    model::user::{UpsertUserParam, User},
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to a database connection (or transaction) and
/// provides methods for creating, reading, and updating user records.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a user from parameter model.
    ///
    /// Inserts a new user at level 1 with zero experience, or updates an existing
    /// user's name and re-activates them. Experience and level are never touched
    /// on conflict, so re-joining members keep their progress.
    ///
    /// # Arguments
    /// - `param` - User upsert parameters including discord_id and name
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
            experience: ActiveValue::Set(0),
            level: ActiveValue::Set(1),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns([entity::user::Column::Name, entity::user::Column::Active])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by their Discord ID.
    ///
    /// Queries the database for a user with the specified Discord ID and returns
    /// their full information if found.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID as u64
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with full data
    /// - `Ok(None)` - No user found with that Discord ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_discord_id(&self, user_id: u64) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Updates a user's cumulative experience and level.
    ///
    /// Sets both progress columns in a single update. Called by the award
    /// pipeline inside its transaction so the ledger credit and the progress
    /// update commit together.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user as u64
    /// - `experience` - New cumulative experience value
    /// - `level` - New level value
    ///
    /// # Returns
    /// - `Ok(())` - Progress updated successfully (or no matching user found)
    /// - `Err(AppError::DbErr)` - Database error during update operation
    pub async fn update_progress(
        &self,
        user_id: u64,
        experience: i32,
        level: i32,
    ) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(user_id.to_string()))
            .col_expr(
                entity::user::Column::Experience,
                sea_orm::sea_query::Expr::value(experience),
            )
            .col_expr(
                entity::user::Column::Level,
                sea_orm::sea_query::Expr::value(level),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets the active flag for a user.
    ///
    /// Used to soft-deactivate members who leave the guild. User rows are never
    /// deleted while activity records reference them.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the user as u64
    /// - `active` - Whether the user should be marked active
    ///
    /// # Returns
    /// - `Ok(())` - Flag updated successfully (or no matching user found)
    /// - `Err(AppError::DbErr)` - Database error during update operation
    pub async fn set_active(&self, user_id: u64, active: bool) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::DiscordId.eq(user_id.to_string()))
            .col_expr(
                entity::user::Column::Active,
                sea_orm::sea_query::Expr::value(active),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
