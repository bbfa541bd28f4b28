use super::*;

/// Tests appending an audit entry for a guild.
///
/// Expected: Ok with module, guild and text stored
#[tokio::test]
async fn creates_log_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotLogRepository::new(db);
    let entry = repo
        .create("Message", Some("123"), "Missing permissions")
        .await?;

    assert_eq!(entry.module, "Message");
    assert_eq!(entry.guild_id.as_deref(), Some("123"));
    assert_eq!(entry.text, "Missing permissions");

    Ok(())
}

/// Tests appending an entry without a guild.
///
/// Expected: Ok with guild_id None
#[tokio::test]
async fn creates_log_entry_without_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotLogRepository::new(db);
    let entry = repo.create("Twitch", None, "Sweep failed").await?;

    assert!(entry.guild_id.is_none());

    Ok(())
}
