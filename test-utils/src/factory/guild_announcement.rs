//! Guild announcement factory for creating persisted announcement ids in tests.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild announcement records with customizable fields.
pub struct GuildAnnouncementFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    message_id: String,
}

impl<'a> GuildAnnouncementFactory<'a> {
    /// Creates a new GuildAnnouncementFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented numeric string
    /// - message_id: auto-incremented numeric string
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            message_id: next_id().to_string(),
        }
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the announcement message ID.
    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    /// Inserts the configured announcement record into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - Inserted announcement entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_announcement::Model, DbErr> {
        entity::guild_announcement::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            message_id: ActiveValue::Set(self.message_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild announcement record with default values.
pub async fn create_announcement(
    db: &DatabaseConnection,
) -> Result<entity::guild_announcement::Model, DbErr> {
    GuildAnnouncementFactory::new(db).build().await
}
