use crate::error::{config::ConfigError, AppError};
use crate::model::xp_config::XpConfig;

pub struct Config {
    pub database_url: String,

    pub discord_token: String,

    /// Optional path to a JSON file overriding the default XP configuration.
    pub xp_config_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_token: std::env::var("DISCORD_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            xp_config_path: std::env::var("XP_CONFIG_PATH").ok(),
        })
    }

    /// Loads the XP configuration, from `XP_CONFIG_PATH` when set.
    ///
    /// Falls back to the compiled defaults when no path is configured. A file
    /// that exists but fails to parse is an error rather than a silent
    /// fallback.
    pub fn load_xp_config(&self) -> Result<XpConfig, AppError> {
        let Some(ref path) = self.xp_config_path else {
            return Ok(XpConfig::default());
        };

        let contents = std::fs::read_to_string(path)?;
        let config: XpConfig = serde_json::from_str(&contents)?;

        Ok(config)
    }
}
