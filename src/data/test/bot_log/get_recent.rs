use chrono::{Duration, Utc};

use super::*;

/// Tests that the newest entries are returned first and the limit is applied.
///
/// Expected: Ok with the two newest entries
#[tokio::test]
async fn returns_newest_entries_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::bot_log::create_log_at(db, "Message", "oldest", now - Duration::minutes(3)).await?;
    factory::bot_log::create_log_at(db, "Message", "newest", now).await?;
    factory::bot_log::create_log_at(db, "Message", "middle", now - Duration::minutes(1)).await?;

    let repo = BotLogRepository::new(db);
    let entries = repo.get_recent(2).await?;

    let texts: Vec<&str> = entries.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["newest", "middle"]);

    Ok(())
}

/// Tests reading an empty log.
///
/// Expected: Ok with no entries
#[tokio::test]
async fn returns_empty_when_no_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_log(db, "Message", "only").await?;

    let repo = BotLogRepository::new(db);
    assert_eq!(repo.get_recent(0).await?.len(), 0);
    assert_eq!(repo.get_recent(10).await?.len(), 1);

    Ok(())
}
