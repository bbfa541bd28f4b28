use super::*;

/// Tests that updating one setting only changes its own column.
///
/// Expected: Ok(1) with the language changed and other fields untouched
#[tokio::test]
async fn updates_single_column() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::guild_config::GuildConfigFactory::new(db)
        .weather_city("Oslo")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let updated = repo
        .update_setting(&stored.guild_id, &GuildSetting::Language("fr".to_string()))
        .await?;

    assert_eq!(updated, 1);

    let record = repo.find_by_guild_id(&stored.guild_id).await?.unwrap();
    assert_eq!(record.language, "fr");
    assert_eq!(record.weather_city, "Oslo");

    Ok(())
}

/// Tests writing numeric settings.
///
/// Expected: Ok with timezone and embed color stored as integers
#[tokio::test]
async fn updates_numeric_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_guild_config(db).await?;

    let repo = GuildConfigRepository::new(db);
    repo.update_setting(&stored.guild_id, &GuildSetting::Timezone(-7))
        .await?;
    repo.update_setting(&stored.guild_id, &GuildSetting::EmbedColor(0xabcdef))
        .await?;

    let record = repo.find_by_guild_id(&stored.guild_id).await?.unwrap();
    assert_eq!(record.timezone, -7);
    assert_eq!(record.embed_color, 0xabcdef);

    Ok(())
}

/// Tests updating a guild that has no stored row.
///
/// Expected: Ok(0)
#[tokio::test]
async fn reports_zero_rows_for_missing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let updated = repo
        .update_setting("404", &GuildSetting::NewsCountry("gb".to_string()))
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}
