use sea_orm::entity::prelude::*;

/// Emoji-to-sound-file binding for a guild.
///
/// At most one row exists per `(guild_id, emoji)` pair; re-binding the same
/// emoji overwrites `sound_filename` rather than inserting a duplicate.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sound_binding")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub emoji: String,
    pub sound_filename: String,
    pub uploader_id: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
