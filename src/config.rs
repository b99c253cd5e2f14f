use crate::error::{config::ConfigError, AppError};

const DEFAULT_SOUND_DIR: &str = "sound_files";

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,

    /// Root directory for guild-scoped sound files, laid out as
    /// `<sound_dir>/<guild_id>/<filename>`.
    pub sound_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            sound_dir: std::env::var("SOUND_DIR")
                .unwrap_or_else(|_| DEFAULT_SOUND_DIR.to_string()),
        })
    }
}
