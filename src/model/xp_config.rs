//! XP reward configuration.
//!
//! Defines per-activity-type reward amounts, cooldowns, and daily caps plus
//! the two level-curve constants. The configuration is deserialized from an
//! optional JSON file at startup, falling back to compiled defaults, and can
//! be overlaid with rows from the `xp_reward` table. It is read-only for the
//! rest of the application.

use std::collections::HashMap;

use serde::Deserialize;

use crate::model::activity::ActivityType;

fn default_base_xp() -> i32 {
    100
}

fn default_level_multiplier() -> f64 {
    1.5
}

/// Reward, cooldown, daily-cap, and level-curve configuration.
///
/// All per-activity maps fail soft: a type without an entry yields zero
/// reward, no cooldown, and no daily cap. Every field has a serde default so
/// a partial configuration file is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XpConfig {
    /// XP granted per credited occurrence, per activity type.
    #[serde(default)]
    pub rewards: HashMap<ActivityType, i32>,

    /// Minimum seconds between credited occurrences, per activity type.
    /// 0 or absent means no cooldown.
    #[serde(default)]
    pub cooldowns: HashMap<ActivityType, i32>,

    /// Maximum credited occurrences per UTC day, per activity type.
    /// 0 or absent means unlimited.
    #[serde(default)]
    pub daily_limits: HashMap<ActivityType, i32>,

    /// Base XP constant of the level curve.
    #[serde(default = "default_base_xp")]
    pub base_xp: i32,

    /// Exponent of the level curve.
    #[serde(default = "default_level_multiplier")]
    pub level_multiplier: f64,
}

impl Default for XpConfig {
    /// Compiled default configuration used when no file is provided.
    fn default() -> Self {
        Self {
            rewards: HashMap::from([
                (ActivityType::Message, 5),
                (ActivityType::Reaction, 3),
                (ActivityType::VoiceMinute, 2),
                (ActivityType::DailyLogin, 20),
                (ActivityType::CommandUsed, 1),
                (ActivityType::KnowledgeCenterApproved, 50),
            ]),
            cooldowns: HashMap::from([(ActivityType::Message, 60)]),
            daily_limits: HashMap::from([
                (ActivityType::Message, 20),
                (ActivityType::Reaction, 20),
                (ActivityType::VoiceMinute, 120),
            ]),
            base_xp: default_base_xp(),
            level_multiplier: default_level_multiplier(),
        }
    }
}

impl XpConfig {
    /// Overlays database-backed reward overrides onto this configuration.
    ///
    /// Each `xp_reward` row replaces the reward, cooldown, and daily limit for
    /// the activity type it names. Rows naming unknown activity types are
    /// skipped.
    ///
    /// # Arguments
    /// - `overrides` - Override rows loaded from the `xp_reward` table
    pub fn apply_overrides(&mut self, overrides: &[entity::xp_reward::Model]) {
        for row in overrides {
            let Some(activity) = ActivityType::parse(&row.name) else {
                continue;
            };

            self.rewards.insert(activity, row.reward);
            self.cooldowns.insert(activity, row.cooldown);
            self.daily_limits.insert(activity, row.daily_limit);
        }
    }
}
