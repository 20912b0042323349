pub use super::daily_activity::Entity as DailyActivity;
pub use super::user::Entity as User;
pub use super::xp_reward::Entity as XpReward;
