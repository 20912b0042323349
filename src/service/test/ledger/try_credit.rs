use super::*;

/// Tests crediting the first activity of the day.
///
/// With no row for today, the credit always succeeds and starts a fresh
/// counter, even for types with a configured cooldown.
///
/// Expected: Credited with count 1
#[tokio::test]
async fn credits_first_activity_of_day() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::DailyActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_id(db, "111222333").await.unwrap();

    let config = XpConfig::default();
    let ledger = ActivityLedger::new(&config);

    let outcome = ledger
        .try_credit(db, 111222333, ActivityType::Message, 5, Utc::now())
        .await
        .unwrap();

    let CreditOutcome::Credited(record) = outcome else {
        panic!("expected credit, got {:?}", outcome);
    };
    assert_eq!(record.count, 1);
    assert_eq!(record.total_xp_awarded, 5);
}

/// Tests the cooldown bypass on the day's first credit.
///
/// The default Message cooldown is 60 seconds, measured against the last
/// credit today. Without a prior credit today there is nothing to measure
/// against, so the first credit goes through immediately.
///
/// Expected: Credited immediately after a credit on the previous day
#[tokio::test]
async fn first_credit_ignores_cooldown() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::DailyActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let yesterday = now.date_naive().checked_sub_days(Days::new(1)).unwrap();

    let user = factory::create_user_with_id(db, "111222333").await.unwrap();
    // Credited seconds ago, but on yesterday's row
    factory::daily_activity::DailyActivityFactory::new(db, &user.discord_id)
        .activity_type("Message")
        .date(yesterday)
        .last_activity(now - Duration::seconds(5))
        .build()
        .await
        .unwrap();

    let config = XpConfig::default();
    let ledger = ActivityLedger::new(&config);

    let outcome = ledger
        .try_credit(db, 111222333, ActivityType::Message, 5, now)
        .await
        .unwrap();

    assert!(outcome.is_credited());
}

/// Tests rejection while the cooldown is still running.
///
/// Expected: OnCooldown with no change to the stored row
#[tokio::test]
async fn rejects_within_cooldown() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::DailyActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_id(db, "111222333").await.unwrap();

    let config = XpConfig::default();
    let ledger = ActivityLedger::new(&config);
    let now = Utc::now();

    ledger
        .try_credit(db, 111222333, ActivityType::Message, 5, now)
        .await
        .unwrap();

    let outcome = ledger
        .try_credit(
            db,
            111222333,
            ActivityType::Message,
            5,
            now + Duration::seconds(30),
        )
        .await
        .unwrap();

    assert_eq!(outcome, CreditOutcome::OnCooldown);

    let record = crate::data::daily_activity::DailyActivityRepository::new(db)
        .find_for_day(111222333, ActivityType::Message, now.date_naive())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.count, 1);
    assert_eq!(record.total_xp_awarded, 5);
}

/// Tests crediting exactly at the cooldown boundary.
///
/// The cooldown requires elapsed time of at least the configured seconds, so
/// the boundary instant itself is creditable.
///
/// Expected: Credited with count 2 and accumulated XP
#[tokio::test]
async fn credits_at_cooldown_boundary() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::DailyActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_id(db, "111222333").await.unwrap();

    let config = XpConfig::default();
    let ledger = ActivityLedger::new(&config);
    let now = Utc::now();

    ledger
        .try_credit(db, 111222333, ActivityType::Message, 5, now)
        .await
        .unwrap();

    let outcome = ledger
        .try_credit(
            db,
            111222333,
            ActivityType::Message,
            5,
            now + Duration::seconds(60),
        )
        .await
        .unwrap();

    let CreditOutcome::Credited(record) = outcome else {
        panic!("expected credit, got {:?}", outcome);
    };
    assert_eq!(record.count, 2);
    assert_eq!(record.total_xp_awarded, 10);
}

/// Tests rejection at the daily cap.
///
/// The default Message cap is 20 credited occurrences per day.
///
/// Expected: DailyCapReached with no change to the stored row
#[tokio::test]
async fn rejects_at_daily_cap() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::DailyActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let user = factory::create_user_with_id(db, "111222333").await.unwrap();
    factory::daily_activity::DailyActivityFactory::new(db, &user.discord_id)
        .activity_type("Message")
        .count(20)
        .total_xp_awarded(100)
        .last_activity(now - Duration::seconds(600))
        .build()
        .await
        .unwrap();

    let config = XpConfig::default();
    let ledger = ActivityLedger::new(&config);

    let outcome = ledger
        .try_credit(db, 111222333, ActivityType::Message, 5, now)
        .await
        .unwrap();

    assert_eq!(outcome, CreditOutcome::DailyCapReached);
}

/// Tests that a new day resets cooldown and cap state.
///
/// Yesterday's row may be capped out, but today's attempt starts a fresh row.
///
/// Expected: Credited with count 1 on today's row
#[tokio::test]
async fn day_rollover_starts_fresh() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::DailyActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let yesterday = now.date_naive().checked_sub_days(Days::new(1)).unwrap();

    let user = factory::create_user_with_id(db, "111222333").await.unwrap();
    factory::daily_activity::DailyActivityFactory::new(db, &user.discord_id)
        .activity_type("Message")
        .date(yesterday)
        .count(20)
        .build()
        .await
        .unwrap();

    let config = XpConfig::default();
    let ledger = ActivityLedger::new(&config);

    let outcome = ledger
        .try_credit(db, 111222333, ActivityType::Message, 5, now)
        .await
        .unwrap();

    let CreditOutcome::Credited(record) = outcome else {
        panic!("expected credit, got {:?}", outcome);
    };
    assert_eq!(record.date, now.date_naive());
    assert_eq!(record.count, 1);
}

/// Tests rapid credits for a type without a cooldown.
///
/// Reactions have no default cooldown, so back-to-back credits both land.
///
/// Expected: both Credited, second with count 2
#[tokio::test]
async fn no_cooldown_allows_rapid_credits() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::DailyActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_id(db, "111222333").await.unwrap();

    let config = XpConfig::default();
    let ledger = ActivityLedger::new(&config);
    let now = Utc::now();

    let first = ledger
        .try_credit(db, 111222333, ActivityType::Reaction, 3, now)
        .await
        .unwrap();
    let second = ledger
        .try_credit(
            db,
            111222333,
            ActivityType::Reaction,
            3,
            now + Duration::seconds(1),
        )
        .await
        .unwrap();

    assert!(first.is_credited());
    let CreditOutcome::Credited(record) = second else {
        panic!("expected credit, got {:?}", second);
    };
    assert_eq!(record.count, 2);
}

/// Tests a type with no configured daily cap.
///
/// A cap of zero or a missing entry means unlimited; a large existing count
/// never blocks the credit.
///
/// Expected: Credited despite a count far above any configured cap
#[tokio::test]
async fn uncapped_type_is_unlimited() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::DailyActivity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let user = factory::create_user_with_id(db, "111222333").await.unwrap();
    factory::daily_activity::DailyActivityFactory::new(db, &user.discord_id)
        .activity_type("CommandUsed")
        .count(1000)
        .last_activity(now - Duration::seconds(600))
        .build()
        .await
        .unwrap();

    let config = XpConfig::default();
    let ledger = ActivityLedger::new(&config);

    let outcome = ledger
        .try_credit(db, 111222333, ActivityType::CommandUsed, 1, now)
        .await
        .unwrap();

    assert!(outcome.is_credited());
}
