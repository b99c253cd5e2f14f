use super::*;

/// Tests deleting an existing binding.
///
/// Expected: Ok(true) with the row removed
#[tokio::test]
async fn removes_existing_binding() -> Result<(), DbErr> {
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

    let repo = SoundBindingRepository::new(db);
    let removed = repo.delete(1, "🔊").await?;

    assert!(removed);
    let count = entity::prelude::SoundBinding::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests deleting an emoji with no binding in the guild.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_binding() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SoundBinding)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SoundBindingRepository::new(db);
    let removed = repo.delete(1, "🔊").await?;

    assert!(!removed);

    Ok(())
}

/// Tests that only the matching `(guild, emoji)` pair is deleted.
///
/// Expected: Ok(true) with unrelated bindings untouched
#[tokio::test]
async fn leaves_other_bindings_untouched() -> Result<(), DbErr> {
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
        .guild_id("1")
        .emoji("🎺")
        .build()
        .await?;
    SoundBindingFactory::new(db)
        .guild_id("2")
        .emoji("🔊")
        .build()
        .await?;

    let repo = SoundBindingRepository::new(db);
    let removed = repo.delete(1, "🔊").await?;

    assert!(removed);
    let remaining = entity::prelude::SoundBinding::find()
        .filter(entity::sound_binding::Column::GuildId.eq("1"))
        .all(db)
        .await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].emoji, "🎺");

    Ok(())
}
