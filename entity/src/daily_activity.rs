use sea_orm::entity::prelude::*;

/// Per-user, per-activity-type, per-UTC-day counter row.
///
/// At most one row exists per `(user_id, activity_type, date)`; the
/// migration enforces this with a unique index. A new day creates a new
/// row, so historical daily totals stay immutable after rollover.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "daily_activity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: String,
    pub activity_type: String,
    pub date: Date,
    pub count: i32,
    pub total_xp_awarded: i32,
    pub last_activity: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::DiscordId"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
