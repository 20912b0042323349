use chrono::{Days, Duration, Utc};

use crate::data::daily_activity::DailyActivityRepository;
use crate::error::AppError;
use crate::model::activity::{ActivityType, InsertDailyActivityParam};
use test_utils::builder::TestBuilder;
use test_utils::factory;
