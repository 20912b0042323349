use super::*;

/// Tests today's activity counts with some credited activity.
///
/// Every activity type must be present, defaulting to zero for types without
/// a row today.
///
/// Expected: counts for credited types, zero for the rest
#[tokio::test]
async fn reports_counts_with_zero_defaults() {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_id(db, "111222333").await.unwrap();
    factory::daily_activity::DailyActivityFactory::new(db, &user.discord_id)
        .activity_type("Message")
        .count(7)
        .build()
        .await
        .unwrap();
    factory::daily_activity::DailyActivityFactory::new(db, &user.discord_id)
        .activity_type("VoiceMinute")
        .count(30)
        .build()
        .await
        .unwrap();

    let config = XpConfig::default();
    let levels = LevelSystem::new(config.clone());
    let notifier = RecordingNotifier::new();
    let locks = UserLocks::new();
    let service = XpService::new(db, &config, &levels, &notifier, &locks);

    let stats = service.get_user_activity_stats(111222333).await.unwrap();

    assert_eq!(stats.len(), ActivityType::ALL.len());
    assert_eq!(stats.get(&ActivityType::Message), Some(&7));
    assert_eq!(stats.get(&ActivityType::VoiceMinute), Some(&30));
    assert_eq!(stats.get(&ActivityType::Reaction), Some(&0));
    assert_eq!(stats.get(&ActivityType::DailyLogin), Some(&0));
}

/// Tests activity counts for an unknown user.
///
/// Expected: an empty map rather than zero-filled entries
#[tokio::test]
async fn returns_empty_for_unknown_user() {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let config = XpConfig::default();
    let levels = LevelSystem::new(config.clone());
    let notifier = RecordingNotifier::new();
    let locks = UserLocks::new();
    let service = XpService::new(db, &config, &levels, &notifier, &locks);

    let stats = service.get_user_activity_stats(999999999).await.unwrap();

    assert!(stats.is_empty());
}
