use super::*;

/// Tests a plain XP award with no level-up.
///
/// Verifies that the user's experience increases by the configured reward and
/// that no notification is sent while below the threshold.
///
/// Expected: Ok(true) with experience 5 and level 1
#[tokio::test]
async fn awards_xp_for_activity() {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_id(db, "111222333").await.unwrap();

    let config = XpConfig::default();
    let levels = LevelSystem::new(config.clone());
    let notifier = RecordingNotifier::new();
    let locks = UserLocks::new();
    let service = XpService::new(db, &config, &levels, &notifier, &locks);

    let awarded = service
        .award_activity(111222333, ActivityType::Message)
        .await
        .unwrap();

    assert!(awarded);
    let user = UserRepository::new(db)
        .find_by_discord_id(111222333)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.experience, 5);
    assert_eq!(user.level, 1);
    assert!(notifier.notifications().await.is_empty());
}

/// Tests the level-up transition.
///
/// A user at 95 XP crosses the level 1 threshold of 100 with a 5 XP message
/// award.
///
/// Expected: Ok(true) with level 2 and one notification recorded
#[tokio::test]
async fn levels_up_when_threshold_crossed() {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("111222333")
        .experience(95)
        .level(1)
        .build()
        .await
        .unwrap();

    let config = XpConfig::default();
    let levels = LevelSystem::new(config.clone());
    let notifier = RecordingNotifier::new();
    let locks = UserLocks::new();
    let service = XpService::new(db, &config, &levels, &notifier, &locks);

    let awarded = service
        .award_activity(111222333, ActivityType::Message)
        .await
        .unwrap();

    assert!(awarded);
    let user = UserRepository::new(db)
        .find_by_discord_id(111222333)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.experience, 100);
    assert_eq!(user.level, 2);
    assert_eq!(notifier.notifications().await, vec![(111222333, 2)]);
}

/// Tests that a failed notification does not fail the award.
///
/// Delivery failures (closed DMs, API errors) are logged and swallowed; the
/// XP and level must still be persisted.
///
/// Expected: Ok(true) with level 2 persisted
#[tokio::test]
async fn award_survives_notification_failure() {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("111222333")
        .experience(95)
        .level(1)
        .build()
        .await
        .unwrap();

    let config = XpConfig::default();
    let levels = LevelSystem::new(config.clone());
    let notifier = RecordingNotifier::failing();
    let locks = UserLocks::new();
    let service = XpService::new(db, &config, &levels, &notifier, &locks);

    let awarded = service
        .award_activity(111222333, ActivityType::Message)
        .await
        .unwrap();

    assert!(awarded);
    let user = UserRepository::new(db)
        .find_by_discord_id(111222333)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.level, 2);
}

/// Tests awarding to an unregistered user.
///
/// Users must exist before earning XP; unknown IDs are ignored without
/// writing any ledger state.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_unknown_user() {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let config = XpConfig::default();
    let levels = LevelSystem::new(config.clone());
    let notifier = RecordingNotifier::new();
    let locks = UserLocks::new();
    let service = XpService::new(db, &config, &levels, &notifier, &locks);

    let awarded = service
        .award_activity(999999999, ActivityType::Message)
        .await
        .unwrap();

    assert!(!awarded);
}

/// Tests that a rejected credit grants nothing.
///
/// A second message within the 60 second cooldown is rejected by the ledger
/// and must not change the user's XP.
///
/// Expected: Ok(false) with experience unchanged
#[tokio::test]
async fn grants_nothing_on_cooldown() {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_id(db, "111222333").await.unwrap();

    let config = XpConfig::default();
    let levels = LevelSystem::new(config.clone());
    let notifier = RecordingNotifier::new();
    let locks = UserLocks::new();
    let service = XpService::new(db, &config, &levels, &notifier, &locks);

    let first = service
        .award_activity(111222333, ActivityType::Message)
        .await
        .unwrap();
    let second = service
        .award_activity(111222333, ActivityType::Message)
        .await
        .unwrap();

    assert!(first);
    assert!(!second);
    let user = UserRepository::new(db)
        .find_by_discord_id(111222333)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.experience, 5);
}

/// Tests an activity configured with zero reward.
///
/// The ledger slot is still consumed so the occurrence counts toward the
/// daily cap, but no XP is granted and the call reports false.
///
/// Expected: Ok(false) with a ledger row written and experience unchanged
#[tokio::test]
async fn zero_reward_consumes_slot_without_xp() {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_id(db, "111222333").await.unwrap();

    let mut config = XpConfig::default();
    config.rewards.insert(ActivityType::Message, 0);
    let levels = LevelSystem::new(config.clone());
    let notifier = RecordingNotifier::new();
    let locks = UserLocks::new();
    let service = XpService::new(db, &config, &levels, &notifier, &locks);

    let awarded = service
        .award_activity(111222333, ActivityType::Message)
        .await
        .unwrap();

    assert!(!awarded);
    let user = UserRepository::new(db)
        .find_by_discord_id(111222333)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.experience, 0);

    let stats = service.get_user_activity_stats(111222333).await.unwrap();
    assert_eq!(stats.get(&ActivityType::Message), Some(&1));
}
