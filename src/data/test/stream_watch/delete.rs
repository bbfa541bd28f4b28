use super::*;

/// Tests deleting a watch by guild and login.
///
/// Expected: Ok(1) and the other guild's watch of the same login kept
#[tokio::test]
async fn deletes_watch_in_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_migrations()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::stream_watch::StreamWatchFactory::new(db, "1")
        .login("alpha")
        .build()
        .await?;
    factory::stream_watch::StreamWatchFactory::new(db, "2")
        .login("alpha")
        .build()
        .await?;

    let repo = StreamWatchRepository::new(db);
    let deleted = repo.delete("1", "alpha").await?;

    assert_eq!(deleted, 1);
    assert!(repo.get_by_guild("1").await?.is_empty());
    assert_eq!(repo.get_by_guild("2").await?.len(), 1);

    Ok(())
}

/// Tests deleting a login that is not watched.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_nothing_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_migrations()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StreamWatchRepository::new(db);
    let deleted = repo.delete("1", "nobody").await?;

    assert_eq!(deleted, 0);

    Ok(())
}
