use super::*;

/// Tests persisting a watched stream with a custom notification.
///
/// Expected: Ok with the login, channel and custom fields stored
#[tokio::test]
async fn creates_stream_watch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_migrations()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StreamWatchRepository::new(db);
    let watch = StreamWatch::new(
        "100",
        "200",
        "Streamer",
        false,
        CustomNotification {
            message: Some("{name} is live!".to_string()),
            image_url: None,
        },
    );
    let created = repo.create(&watch).await?;

    assert_eq!(created.login, "streamer");
    assert_eq!(created.channel_id, "200");
    assert!(!created.is_online());
    assert_eq!(created.custom.message.as_deref(), Some("{name} is live!"));

    let stored = repo.get_by_guild("100").await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}

/// Tests that the store rejects a second watch of the same login in one guild.
///
/// Expected: Err with only the first row stored
#[tokio::test]
async fn rejects_duplicate_guild_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StreamWatchRepository::new(db);
    repo.create(&StreamWatch::new(
        "100",
        "200",
        "streamer",
        false,
        CustomNotification::default(),
    ))
    .await?;

    let result = repo
        .create(&StreamWatch::new(
            "100",
            "201",
            "Streamer",
            false,
            CustomNotification::default(),
        ))
        .await;

    assert!(result.is_err());
    assert_eq!(repo.get_by_guild("100").await?.len(), 1);

    Ok(())
}
