use super::*;

/// Tests that a guild's bound emojis come back in insertion order.
///
/// The board synchronizer mirrors this ordering onto the announcement
/// message's reaction set, so it must be stable across calls.
///
/// Expected: Ok with emojis in insertion order
#[tokio::test]
async fn returns_emojis_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundBinding)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for emoji in ["🥁", "🔊", "🎺"] {
        SoundBindingFactory::new(db)
            .guild_id("1")
            .emoji(emoji)
            .build()
            .await?;
    }

    let repo = SoundBindingRepository::new(db);
    let emojis = repo.list_emojis(1).await?;

    assert_eq!(emojis, vec!["🥁", "🔊", "🎺"]);

    Ok(())
}

/// Tests listing a guild with no bindings.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_bindings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundBinding)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SoundBindingRepository::new(db);
    let emojis = repo.list_emojis(1).await?;

    assert!(emojis.is_empty());

    Ok(())
}

/// Tests that bindings from other guilds are excluded from the listing.
///
/// Expected: Ok with only the requested guild's emojis
#[tokio::test]
async fn excludes_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundBinding)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SoundBindingFactory::new(db)
        .guild_id("1")
        .emoji("🔊")
        .build()
        .await?;
    SoundBindingFactory::new(db)
        .guild_id("2")
        .emoji("🎺")
        .build()
        .await?;

    let repo = SoundBindingRepository::new(db);
    let emojis = repo.list_emojis(1).await?;

    assert_eq!(emojis, vec!["🔊"]);

    Ok(())
}
