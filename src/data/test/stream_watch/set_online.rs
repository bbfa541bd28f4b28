use super::*;

/// Tests storing the online flag for one watch.
///
/// Expected: Ok with only the targeted watch flipped
#[tokio::test]
async fn sets_online_flag() -> Result<(), DbErr> {
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
    repo.set_online("1", "alpha", true).await?;

    assert!(repo.get_by_guild("1").await?[0].is_online());
    assert!(!repo.get_by_guild("2").await?[0].is_online());

    repo.set_online("1", "alpha", false).await?;
    assert!(!repo.get_by_guild("1").await?[0].is_online());

    Ok(())
}
