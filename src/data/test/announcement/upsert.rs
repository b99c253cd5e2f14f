use super::*;

/// Tests persisting an announcement id for a guild with no prior record.
///
/// Expected: Ok with record created
#[tokio::test]
async fn creates_new_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildAnnouncement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AnnouncementRepository::new(db);
    let record = repo.upsert(1, 500).await?;

    assert_eq!(record.guild_id, "1");
    assert_eq!(record.message_id, "500");

    let count = entity::prelude::GuildAnnouncement::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests replacing a guild's previous announcement id.
///
/// Verifies that the stored id is overwritten in place: one record per guild,
/// reflecting the latest message.
///
/// Expected: Ok with record updated, no duplicate
#[tokio::test]
async fn replaces_previous_id_without_duplicating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildAnnouncement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildAnnouncementFactory::new(db)
        .guild_id("1")
        .message_id("500")
        .build()
        .await?;

    let repo = AnnouncementRepository::new(db);
    let record = repo.upsert(1, 501).await?;

    assert_eq!(record.message_id, "501");

    let count = entity::prelude::GuildAnnouncement::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
