use super::*;

/// Tests that only the requested guild's watches are returned, in insertion order.
///
/// Expected: Ok with two watches from guild "1"
#[tokio::test]
async fn returns_watches_for_guild_only() -> Result<(), DbErr> {
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
    factory::stream_watch::StreamWatchFactory::new(db, "1")
        .login("beta")
        .online(true)
        .build()
        .await?;
    factory::create_stream_watch(db, "2").await?;

    let repo = StreamWatchRepository::new(db);
    let watches = repo.get_by_guild("1").await?;

    let logins: Vec<&str> = watches.iter().map(|w| w.login.as_str()).collect();
    assert_eq!(logins, vec!["alpha", "beta"]);
    assert!(watches[1].is_online());

    Ok(())
}

/// Tests a guild without watches.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_guild_without_watches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_migrations()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StreamWatchRepository::new(db);
    let watches = repo.get_by_guild("1").await?;

    assert!(watches.is_empty());

    Ok(())
}
