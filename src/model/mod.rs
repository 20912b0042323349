//! Domain models and operation-specific parameter types.
//!
//! Domain models mirror the database entities with identifiers parsed to `u64`
//! and activity type names parsed to the closed `ActivityType` enum. Conversion
//! from entity models happens at the repository boundary via `from_entity`.

pub mod activity;
pub mod user;
pub mod xp_config;
