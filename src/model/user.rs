//! User domain models and parameters.
//!
//! Provides domain models for platform members with XP and level tracking.
//! Includes parameter types for user creation during guild join or
//! registration, and the progress view returned by stat queries.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Platform member with cumulative experience and level.
///
/// `experience` only grows through the award pathway (or explicit admin
/// override); `level` is maintained by the award pipeline at write time
/// rather than re-derived lazily from `experience`.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
    /// Cumulative experience points.
    pub experience: i32,
    /// Current level, starting at 1.
    pub level: i32,
    /// Whether the user is active. Members who leave are soft-deactivated.
    pub active: bool,
    /// When the user row was first created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Failed to convert stored
    ///   user Discord ID from String to u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            discord_id,
            name: entity.name,
            experience: entity.experience,
            level: entity.level,
            active: entity.active,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for upserting a user on guild join or registration.
///
/// Creates new users with zero experience at level 1, or refreshes an
/// existing user's display name and re-activates them without touching
/// experience or level.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Display name of the user.
    pub name: String,
}

/// A user's progress toward the next level.
///
/// Returned by progress queries; all fields are zero for unknown users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserProgress {
    /// Current level.
    pub level: i32,
    /// Cumulative experience points.
    pub xp: i32,
    /// XP threshold required to advance past the current level.
    pub required_xp: i32,
}
