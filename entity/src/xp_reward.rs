use sea_orm::entity::prelude::*;

/// Database-backed override for a single activity type's reward settings.
///
/// Rows overlay the static XP configuration at startup. `name` holds the
/// activity type name; unknown names are ignored when merging.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "xp_reward")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub reward: i32,
    pub cooldown: i32,
    pub daily_limit: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
