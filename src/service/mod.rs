//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! Discord event handlers and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Cooldown, daily-cap, and level-curve rules
//! - **Orchestration**: Coordinating repository calls and the level-up notifier
//! - **Domain Models**: Working with domain models rather than entity models
//! - **Transaction Management**: Committing ledger credits and XP updates atomically

pub mod ledger;
pub mod level;
pub mod notify;
pub mod voice;
pub mod xp;
