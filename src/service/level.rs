//! Level curve arithmetic and reward lookups.
//!
//! Pure functions over the XP configuration; no side effects, no I/O. The
//! award pipeline consults this module for reward amounts and level-up
//! decisions, and the progress query uses it to report the next threshold.

use crate::model::{activity::ActivityType, xp_config::XpConfig};

/// Level curve and per-activity reward calculator.
///
/// Owns a copy of the XP configuration; construct once at startup and share.
#[derive(Debug, Clone)]
pub struct LevelSystem {
    config: XpConfig,
}

impl LevelSystem {
    /// Creates a new LevelSystem over the given configuration.
    ///
    /// # Arguments
    /// - `config` - Reward, cooldown, cap, and curve configuration
    ///
    /// # Returns
    /// - `LevelSystem` - New calculator instance
    pub fn new(config: XpConfig) -> Self {
        Self { config }
    }

    /// Returns the cumulative XP required to advance past the given level.
    ///
    /// Computed as `floor(base_xp * level ^ level_multiplier)`. Strictly
    /// increasing in `level` for any positive base and multiplier.
    ///
    /// # Arguments
    /// - `level` - Level to compute the threshold for
    ///
    /// # Returns
    /// - `i32` - XP threshold for that level
    pub fn required_xp(&self, level: i32) -> i32 {
        (self.config.base_xp as f64 * (level as f64).powf(self.config.level_multiplier)) as i32
    }

    /// Evaluates whether cumulative XP crosses the current level's threshold.
    ///
    /// Advances at most one level per call, even when `total_xp` also crosses
    /// the threshold for the level after. A large lump award therefore credits
    /// one level-up now and the next one on the following award. This mirrors
    /// the behavior the platform has always had; switching to a loop would
    /// change when users with big one-off grants level up.
    ///
    /// # Arguments
    /// - `current_level` - The user's level before this evaluation
    /// - `total_xp` - The user's cumulative XP after the award
    ///
    /// # Returns
    /// - `(new_level, true)` - Threshold crossed; `new_level` is `current_level + 1`
    /// - `(current_level, false)` - No level-up
    pub fn evaluate_level(&self, current_level: i32, total_xp: i32) -> (i32, bool) {
        let required_xp = self.required_xp(current_level);

        if total_xp >= required_xp {
            return (current_level + 1, true);
        }

        (current_level, false)
    }

    /// Returns the configured XP reward for an activity type.
    ///
    /// # Arguments
    /// - `activity` - Activity type to look up
    ///
    /// # Returns
    /// - `i32` - Configured reward, or 0 if the type has no entry
    pub fn reward_for(&self, activity: ActivityType) -> i32 {
        self.config.rewards.get(&activity).copied().unwrap_or(0)
    }
}
