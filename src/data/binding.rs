use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

pub struct SoundBindingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SoundBindingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates the binding for `(guild_id, emoji)`.
    ///
    /// At most one binding exists per pair: if the emoji is already bound for
    /// the guild, the stored filename is overwritten rather than inserting a
    /// duplicate row. The uploader is updated alongside the filename.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    /// - `emoji`: emoji string as reported by the gateway (unicode or `<:name:id>`)
    /// - `filename`: sound file name within the guild's storage directory
    /// - `uploader_id`: Discord user ID of the uploader
    ///
    /// # Returns
    /// - `Ok(Model)`: the stored binding, reflecting the latest filename
    /// - `Err(DbErr)`: database error during query or write
    pub async fn upsert(
        &self,
        guild_id: u64,
        emoji: &str,
        filename: &str,
        uploader_id: u64,
    ) -> Result<entity::sound_binding::Model, DbErr> {
        let existing = entity::prelude::SoundBinding::find()
            .filter(entity::sound_binding::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::sound_binding::Column::Emoji.eq(emoji))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            let mut active: entity::sound_binding::ActiveModel = existing.into();
            active.sound_filename = ActiveValue::Set(filename.to_string());
            active.uploader_id = ActiveValue::Set(uploader_id.to_string());
            active.update(self.db).await
        } else {
            entity::sound_binding::ActiveModel {
                guild_id: ActiveValue::Set(guild_id.to_string()),
                emoji: ActiveValue::Set(emoji.to_string()),
                sound_filename: ActiveValue::Set(filename.to_string()),
                uploader_id: ActiveValue::Set(uploader_id.to_string()),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await
        }
    }

    /// Finds the binding for `(guild_id, emoji)` if one exists.
    pub async fn find(
        &self,
        guild_id: u64,
        emoji: &str,
    ) -> Result<Option<entity::sound_binding::Model>, DbErr> {
        entity::prelude::SoundBinding::find()
            .filter(entity::sound_binding::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::sound_binding::Column::Emoji.eq(emoji))
            .one(self.db)
            .await
    }

    /// Returns the filename bound to `(guild_id, emoji)`, if any.
    pub async fn get_filename(&self, guild_id: u64, emoji: &str) -> Result<Option<String>, DbErr> {
        Ok(self
            .find(guild_id, emoji)
            .await?
            .map(|binding| binding.sound_filename))
    }

    /// Returns all bindings for a guild in insertion order.
    pub async fn list(&self, guild_id: u64) -> Result<Vec<entity::sound_binding::Model>, DbErr> {
        entity::prelude::SoundBinding::find()
            .filter(entity::sound_binding::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::sound_binding::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the bound emojis for a guild in insertion order.
    ///
    /// This is the ordered set the board synchronizer mirrors onto the
    /// announcement message's reaction set.
    pub async fn list_emojis(&self, guild_id: u64) -> Result<Vec<String>, DbErr> {
        Ok(self
            .list(guild_id)
            .await?
            .into_iter()
            .map(|binding| binding.emoji)
            .collect())
    }

    /// Deletes the binding for `(guild_id, emoji)`.
    ///
    /// # Returns
    /// - `Ok(true)`: a binding existed and was removed
    /// - `Ok(false)`: no binding existed for the pair
    /// - `Err(DbErr)`: database error during query or delete
    pub async fn delete(&self, guild_id: u64, emoji: &str) -> Result<bool, DbErr> {
        match self.find(guild_id, emoji).await? {
            Some(binding) => {
                binding.delete(self.db).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
