use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use tracing::warn;

pub struct AnnouncementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnnouncementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the persisted announcement message id for a guild, if any.
    ///
    /// A stored id that does not parse as a Discord snowflake is treated as
    /// absent so the board synchronizer recreates the message instead of
    /// failing the dispatch.
    pub async fn find_message_id(&self, guild_id: u64) -> Result<Option<u64>, DbErr> {
        let record = entity::prelude::GuildAnnouncement::find()
            .filter(entity::guild_announcement::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        Ok(record.and_then(|record| match record.message_id.parse::<u64>() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!(
                    "Stored announcement id '{}' for guild {} is not a snowflake",
                    record.message_id, guild_id
                );
                None
            }
        }))
    }

    /// Persists the announcement message id for a guild, replacing any previous id.
    pub async fn upsert(
        &self,
        guild_id: u64,
        message_id: u64,
    ) -> Result<entity::guild_announcement::Model, DbErr> {
        entity::prelude::GuildAnnouncement::insert(entity::guild_announcement::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            message_id: ActiveValue::Set(message_id.to_string()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild_announcement::Column::GuildId)
                .update_columns([entity::guild_announcement::Column::MessageId])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}
