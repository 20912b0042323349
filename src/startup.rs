use crate::{
    config::Config, data::xp_reward::XpRewardRepository, error::AppError,
    model::xp_config::XpConfig,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Loads the XP configuration and applies database-backed overrides.
///
/// Reads the static configuration (file or compiled defaults), then overlays
/// any rows from the `xp_reward` table. Overrides win over the static values
/// for the activity types they name.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection with migrations applied
///
/// # Returns
/// - `Ok(XpConfig)` - Effective XP configuration
/// - `Err(AppError)` - Failed to read the config file or query overrides
pub async fn load_xp_config(
    config: &Config,
    db: &sea_orm::DatabaseConnection,
) -> Result<XpConfig, AppError> {
    let mut xp_config = config.load_xp_config()?;

    let overrides = XpRewardRepository::new(db).get_all().await?;
    if !overrides.is_empty() {
        tracing::info!("Applying {} XP reward overrides from database", overrides.len());
        xp_config.apply_overrides(&overrides);
    }

    Ok(xp_config)
}
