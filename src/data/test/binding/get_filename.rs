use super::*;

/// Tests resolving the filename for a bound emoji.
///
/// Expected: Ok with Some(filename)
#[tokio::test]
async fn returns_bound_filename() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundBinding)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SoundBindingFactory::new(db)
        .guild_id("1")
        .emoji("🔊")
        .sound_filename("horn.mp3")
        .build()
        .await?;

    let repo = SoundBindingRepository::new(db);
    let filename = repo.get_filename(1, "🔊").await?;

    assert_eq!(filename, Some("horn.mp3".to_string()));

    Ok(())
}

/// Tests resolving an emoji with no binding in the guild.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unbound_emoji() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundBinding)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SoundBindingRepository::new(db);
    let filename = repo.get_filename(1, "🔊").await?;

    assert_eq!(filename, None);

    Ok(())
}

/// Tests that a binding in another guild does not leak across guilds.
///
/// Expected: Ok with None for the unbound guild
#[tokio::test]
async fn is_scoped_to_the_requested_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundBinding)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SoundBindingFactory::new(db)
        .guild_id("2")
        .emoji("🔊")
        .sound_filename("horn.mp3")
        .build()
        .await?;

    let repo = SoundBindingRepository::new(db);
    let filename = repo.get_filename(1, "🔊").await?;

    assert_eq!(filename, None);

    Ok(())
}
