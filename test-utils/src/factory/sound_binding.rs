//! Sound binding factory for creating test binding entities.
//!
//! This module provides factory methods for creating emoji-to-sound bindings with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sound bindings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::sound_binding::SoundBindingFactory;
///
/// let binding = SoundBindingFactory::new(&db)
///     .guild_id("987654321")
///     .emoji("🔊")
///     .sound_filename("horn.mp3")
///     .build()
///     .await?;
/// ```
pub struct SoundBindingFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    emoji: String,
    sound_filename: String,
    uploader_id: String,
}

impl<'a> SoundBindingFactory<'a> {
    /// Creates a new SoundBindingFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented numeric string
    /// - emoji: `"emoji_{id}"` (intentionally unique per factory call)
    /// - sound_filename: `"sound_{id}.mp3"`
    /// - uploader_id: auto-incremented numeric string
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            emoji: format!("emoji_{}", id),
            sound_filename: format!("sound_{}.mp3", id),
            uploader_id: id.to_string(),
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the emoji.
    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Sets the sound filename.
    pub fn sound_filename(mut self, sound_filename: impl Into<String>) -> Self {
        self.sound_filename = sound_filename.into();
        self
    }

    /// Sets the uploader ID.
    pub fn uploader_id(mut self, uploader_id: impl Into<String>) -> Self {
        self.uploader_id = uploader_id.into();
        self
    }

    /// Inserts the configured binding into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - Inserted binding entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::sound_binding::Model, DbErr> {
        entity::sound_binding::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            emoji: ActiveValue::Set(self.emoji),
            sound_filename: ActiveValue::Set(self.sound_filename),
            uploader_id: ActiveValue::Set(self.uploader_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a sound binding with default values.
pub async fn create_binding(
    db: &DatabaseConnection,
) -> Result<entity::sound_binding::Model, DbErr> {
    SoundBindingFactory::new(db).build().await
}
