use super::*;

/// Tests upserting a binding for a previously unbound emoji.
///
/// Verifies that the repository inserts a new row carrying the guild id,
/// emoji, filename, and uploader id.
///
/// Expected: Ok with binding created
#[tokio::test]
async fn creates_new_binding() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundBinding)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SoundBindingRepository::new(db);
    let binding = repo.upsert(1, "🔊", "horn.mp3", 42).await?;

    assert_eq!(binding.guild_id, "1");
    assert_eq!(binding.emoji, "🔊");
    assert_eq!(binding.sound_filename, "horn.mp3");
    assert_eq!(binding.uploader_id, "42");

    let count = entity::prelude::SoundBinding::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests upserting an emoji that is already bound in the guild.
///
/// Verifies that the existing row is updated in place with the new filename
/// and uploader rather than a duplicate row being inserted.
///
/// Expected: Ok with binding updated, no duplicate
#[tokio::test]
async fn overwrites_existing_binding_without_duplicating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundBinding)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = SoundBindingFactory::new(db)
        .guild_id("1")
        .emoji("🔊")
        .sound_filename("old.mp3")
        .uploader_id("42")
        .build()
        .await?;

    let repo = SoundBindingRepository::new(db);
    let updated = repo.upsert(1, "🔊", "new.mp3", 99).await?;

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.sound_filename, "new.mp3");
    assert_eq!(updated.uploader_id, "99");

    let count = entity::prelude::SoundBinding::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the same emoji bound in two guilds produces two independent rows.
///
/// Expected: Ok with one binding per guild
#[tokio::test]
async fn same_emoji_in_different_guilds_coexists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundBinding)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SoundBindingRepository::new(db);
    repo.upsert(1, "🔊", "horn.mp3", 42).await?;
    repo.upsert(2, "🔊", "bell.mp3", 42).await?;

    let count = entity::prelude::SoundBinding::find().count(db).await?;
    assert_eq!(count, 2);

    let guild_two = entity::prelude::SoundBinding::find()
        .filter(entity::sound_binding::Column::GuildId.eq("2"))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(guild_two.sound_filename, "bell.mp3");

    Ok(())
}
