//! Activity types and daily activity domain models.
//!
//! Provides the closed enumeration of XP-earning activity types and the domain
//! model for per-user, per-type, per-day activity counters. Activity types are
//! stored by name in the database and in the XP configuration file; unknown
//! stored names surface as an internal error at the conversion boundary.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::{internal::InternalError, AppError},
    util::parse::parse_u64_from_string,
};

/// Categorized trigger for an XP award.
///
/// A closed enumeration rather than a string-keyed map, so unknown values are
/// a validation-time concern at the storage boundary instead of a silent
/// runtime default. Configuration lookups for types without an entry still
/// fail soft to zero reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    /// Message sent in a guild channel.
    Message,
    /// Reaction added to a message.
    Reaction,
    /// One full minute spent in a voice channel.
    VoiceMinute,
    /// First platform contact of the UTC day.
    DailyLogin,
    /// Bot command invoked.
    CommandUsed,
    /// Knowledge center post approved by a moderator.
    KnowledgeCenterApproved,
}

impl ActivityType {
    /// All activity types, in declaration order.
    ///
    /// Used for defaulting absent types to zero in activity stat queries.
    pub const ALL: [ActivityType; 6] = [
        ActivityType::Message,
        ActivityType::Reaction,
        ActivityType::VoiceMinute,
        ActivityType::DailyLogin,
        ActivityType::CommandUsed,
        ActivityType::KnowledgeCenterApproved,
    ];

    /// Returns the stable name used for storage and configuration keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Message => "Message",
            ActivityType::Reaction => "Reaction",
            ActivityType::VoiceMinute => "VoiceMinute",
            ActivityType::DailyLogin => "DailyLogin",
            ActivityType::CommandUsed => "CommandUsed",
            ActivityType::KnowledgeCenterApproved => "KnowledgeCenterApproved",
        }
    }

    /// Parses a stored activity type name.
    ///
    /// # Arguments
    /// - `name` - Activity type name as stored in the database
    ///
    /// # Returns
    /// - `Some(ActivityType)` - Name matches a known activity type
    /// - `None` - Unknown name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-user, per-activity-type, per-UTC-day counter.
///
/// Tracks how often an activity has been credited today, how much XP it has
/// produced, and when it last occurred. Cooldown and daily-cap decisions are
/// evaluated against these fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyActivity {
    /// Row identifier.
    pub id: i32,
    /// Discord ID of the owning user.
    pub user_id: u64,
    /// Activity type this row counts.
    pub activity_type: ActivityType,
    /// UTC calendar day this row covers.
    pub date: NaiveDate,
    /// Number of credited occurrences today.
    pub count: i32,
    /// Cumulative XP awarded today for this type.
    pub total_xp_awarded: i32,
    /// Timestamp of the last credited occurrence.
    pub last_activity: DateTime<Utc>,
}

impl DailyActivity {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(DailyActivity)` - The converted domain model
    /// - `Err(AppError::InternalErr)` - Stored user ID or activity type name
    ///   could not be parsed
    pub fn from_entity(entity: entity::daily_activity::Model) -> Result<Self, AppError> {
        let user_id = parse_u64_from_string(entity.user_id)?;
        let activity_type = ActivityType::parse(&entity.activity_type)
            .ok_or(InternalError::UnknownActivityType(entity.activity_type))?;

        Ok(Self {
            id: entity.id,
            user_id,
            activity_type,
            date: entity.date,
            count: entity.count,
            total_xp_awarded: entity.total_xp_awarded,
            last_activity: entity.last_activity,
        })
    }
}

/// Parameters for inserting the first activity row of a day.
#[derive(Debug, Clone)]
pub struct InsertDailyActivityParam {
    /// Discord ID of the owning user.
    pub user_id: u64,
    /// Activity type being credited.
    pub activity_type: ActivityType,
    /// UTC calendar day of the credit.
    pub date: NaiveDate,
    /// XP awarded by this first credit.
    pub reward: i32,
    /// Timestamp of the credit.
    pub now: DateTime<Utc>,
}
