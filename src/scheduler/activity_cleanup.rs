use chrono::{Days, Utc};
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{data::daily_activity::DailyActivityRepository, error::AppError};

/// How many days of activity history to keep.
const RETENTION_DAYS: u64 = 7;

/// Starts the daily activity retention scheduler
///
/// This scheduler runs once a day (03:00 UTC) and deletes daily activity rows
/// older than the retention window. The cutoff is a calendar day strictly in
/// the past, so the sweep can never touch a row an in-flight award is writing
/// for today.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Schedule job to run daily at 03:00 UTC
    let job = Job::new_async("0 0 3 * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = sweep_old_activity(&db).await {
                tracing::error!("Error sweeping old activity rows: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Activity retention scheduler started");

    Ok(())
}

/// Deletes activity rows older than the retention window
async fn sweep_old_activity(db: &DatabaseConnection) -> Result<(), AppError> {
    let cutoff = Utc::now()
        .date_naive()
        .checked_sub_days(Days::new(RETENTION_DAYS))
        .unwrap_or_else(|| Utc::now().date_naive());

    let removed = DailyActivityRepository::new(db)
        .delete_older_than(cutoff)
        .await?;

    if removed > 0 {
        tracing::info!("Removed {} old activity rows (cutoff {})", removed, cutoff);
    }

    Ok(())
}
