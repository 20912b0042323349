use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(XpReward::Table)
                    .if_not_exists()
                    .col(pk_auto(XpReward::Id))
                    .col(string_uniq(XpReward::Name))
                    .col(integer(XpReward::Reward).default(0))
                    .col(integer(XpReward::Cooldown).default(0))
                    .col(integer(XpReward::DailyLimit).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(XpReward::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum XpReward {
    Table,
    Id,
    Name,
    Reward,
    Cooldown,
    DailyLimit,
}
