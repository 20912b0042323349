//! XP reward factory for creating test reward override entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an XP reward override row.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Activity type name the override applies to
/// - `reward` - XP granted per credited occurrence
/// - `cooldown` - Cooldown in seconds (0 = none)
/// - `daily_limit` - Daily cap (0 = unlimited)
///
/// # Returns
/// - `Ok(entity::xp_reward::Model)` - Created override entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_xp_reward(
    db: &DatabaseConnection,
    name: impl Into<String>,
    reward: i32,
    cooldown: i32,
    daily_limit: i32,
) -> Result<entity::xp_reward::Model, DbErr> {
    entity::xp_reward::ActiveModel {
        name: ActiveValue::Set(name.into()),
        reward: ActiveValue::Set(reward),
        cooldown: ActiveValue::Set(cooldown),
        daily_limit: ActiveValue::Set(daily_limit),
        ..Default::default()
    }
    .insert(db)
    .await
}
