use sea_orm_migration::{prelude::*, schema::*};

use super::m20260815_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DailyActivity::Table)
                    .if_not_exists()
                    .col(pk_auto(DailyActivity::Id))
                    .col(string(DailyActivity::UserId))
                    .col(string(DailyActivity::ActivityType))
                    .col(date(DailyActivity::Date))
                    .col(integer(DailyActivity::Count).default(0))
                    .col(integer(DailyActivity::TotalXpAwarded).default(0))
                    .col(timestamp(DailyActivity::LastActivity))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_daily_activity_user_id")
                            .from(DailyActivity::Table, DailyActivity::UserId)
                            .to(User::Table, User::DiscordId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per (user, activity type, day)
        manager
            .create_index(
                Index::create()
                    .name("idx_daily_activity_user_type_date")
                    .table(DailyActivity::Table)
                    .col(DailyActivity::UserId)
                    .col(DailyActivity::ActivityType)
                    .col(DailyActivity::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DailyActivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DailyActivity {
    Table,
    Id,
    UserId,
    ActivityType,
    Date,
    Count,
    TotalXpAwarded,
    LastActivity,
}
