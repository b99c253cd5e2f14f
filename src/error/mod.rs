//! Error types for the soundboard bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type for startup and command handling, while `PlaybackError`
//! carries the playback dispatch taxonomy that drives retry and abort decisions.

pub mod config;
pub mod playback;

use thiserror::Error;

use crate::error::config::ConfigError;

pub use crate::error::playback::PlaybackError;

/// Top-level application error type.
///
/// Aggregates the error types that can occur during startup and in the Discord
/// event handlers. Most variants use `#[from]` for automatic conversion;
/// `serenity::Error` is boxed manually because of its size.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Filesystem error while reading or writing guild sound storage.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
