use crate::data::user::UserRepository;
use crate::error::AppError;
use crate::model::user::UpsertUserParam;
use test_utils::builder::TestBuilder;
use test_utils::factory;

mod find_by_discord_id;
mod set_active;
