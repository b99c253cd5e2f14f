use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SoundBinding::Table)
                    .if_not_exists()
                    .col(pk_auto(SoundBinding::Id))
                    .col(string(SoundBinding::GuildId))
                    .col(string(SoundBinding::Emoji))
                    .col(string(SoundBinding::SoundFilename))
                    .col(string(SoundBinding::UploaderId))
                    .col(timestamp_with_time_zone(SoundBinding::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sound_binding_guild_emoji")
                    .table(SoundBinding::Table)
                    .col(SoundBinding::GuildId)
                    .col(SoundBinding::Emoji)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SoundBinding::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SoundBinding {
    Table,
    Id,
    GuildId,
    Emoji,
    SoundFilename,
    UploaderId,
    CreatedAt,
}
