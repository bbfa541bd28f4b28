use super::*;

/// Tests inserting a guild configuration built from defaults.
///
/// Expected: Ok with every field persisted and readable again
#[tokio::test]
async fn creates_guild_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let record = GuildRecord::with_defaults("123456789", &GuildDefaults::default());
    let created = repo.create(&record).await?;

    assert_eq!(created, record);

    let stored = repo.find_by_guild_id("123456789").await?;
    assert_eq!(stored, Some(record));

    Ok(())
}

/// Tests that a second insert for the same guild is rejected.
///
/// Expected: Err from the unique guild_id constraint
#[tokio::test]
async fn rejects_duplicate_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let record = GuildRecord::with_defaults("123456789", &GuildDefaults::default());
    repo.create(&record).await?;

    let result = repo.create(&record).await;

    assert!(result.is_err());

    Ok(())
}
