//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Repositories are generic over `ConnectionTrait` so the same operations run against the
//! pooled connection or inside a transaction.

pub mod daily_activity;
pub mod user;
pub mod xp_reward;
