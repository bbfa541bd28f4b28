use super::*;

/// Tests finding a stored guild configuration.
///
/// Expected: Ok(Some) with the stored values
#[tokio::test]
async fn finds_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::guild_config::GuildConfigFactory::new(db)
        .language("de")
        .embed_color(0x112233)
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let result = repo.find_by_guild_id(&stored.guild_id).await?;

    let record = result.unwrap();
    assert_eq!(record.guild_id, stored.guild_id);
    assert_eq!(record.language, "de");
    assert_eq!(record.embed_color, 0x112233);

    Ok(())
}

/// Tests looking up a guild that was never persisted.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_config(db).await?;

    let repo = GuildConfigRepository::new(db);
    let result = repo.find_by_guild_id("999999999").await?;

    assert!(result.is_none());

    Ok(())
}
