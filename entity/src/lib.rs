//! SeaORM entity models for the levelboard database schema.
//!
//! Entities are plain data models with no business logic. Conversion to
//! domain models happens at the repository boundary in the main crate.

pub mod prelude;

pub mod daily_activity;
pub mod user;
pub mod xp_reward;
