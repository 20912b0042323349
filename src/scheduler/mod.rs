//! Cron jobs for automated housekeeping.

pub mod activity_cleanup;
