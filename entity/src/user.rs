use sea_orm::entity::prelude::*;

/// Platform member with cumulative XP and level.
///
/// `discord_id` is the Discord snowflake stored as a string primary key.
/// Rows are never deleted while activity records reference them; members
/// who leave are soft-deactivated via `active` instead.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub discord_id: String,
    pub name: String,
    pub experience: i32,
    pub level: i32,
    pub active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::daily_activity::Entity")]
    DailyActivity,
}

impl Related<super::daily_activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyActivity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
