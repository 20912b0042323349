use super::*;

/// Tests listing reward overrides when none exist.
///
/// Expected: Ok with an empty vec
#[tokio::test]
async fn returns_empty_when_no_overrides() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::XpReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = XpRewardRepository::new(db);
    let rows = repo.get_all().await?;

    assert!(rows.is_empty());

    Ok(())
}

/// Tests listing all stored reward overrides.
///
/// Expected: Ok with every stored row returned
#[tokio::test]
async fn returns_all_overrides() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::XpReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_xp_reward(db, "Message", 10, 30, 50).await?;
    factory::create_xp_reward(db, "Reaction", 5, 0, 0).await?;

    let repo = XpRewardRepository::new(db);
    let rows = repo.get_all().await?;

    assert_eq!(rows.len(), 2);
    let message = rows.iter().find(|r| r.name == "Message").unwrap();
    assert_eq!(message.reward, 10);
    assert_eq!(message.cooldown, 30);
    assert_eq!(message.daily_limit, 50);

    Ok(())
}
