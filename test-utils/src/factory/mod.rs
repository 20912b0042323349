//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create a credited activity row for that user
//!     let activity = factory::daily_activity::create_activity(&db, &user.discord_id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .discord_id("987654321")
//!     .experience(95)
//!     .level(1)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `daily_activity` - Create daily activity counter entities
//! - `xp_reward` - Create XP reward override entities
//! - `helpers` - Shared utilities (unique ID generation)

pub mod daily_activity;
pub mod helpers;
pub mod user;
pub mod xp_reward;

// Re-export commonly used factory functions for concise usage
pub use daily_activity::create_activity;
pub use user::{create_user, create_user_with_id};
pub use xp_reward::create_xp_reward;
