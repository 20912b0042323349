pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_user_table;
mod m20260815_000002_create_daily_activity_table;
mod m20260815_000003_create_xp_reward_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_user_table::Migration),
            Box::new(m20260815_000002_create_daily_activity_table::Migration),
            Box::new(m20260815_000003_create_xp_reward_table::Migration),
        ]
    }
}
