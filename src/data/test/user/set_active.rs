use super::*;

/// Tests deactivating a user.
///
/// Verifies that the active flag is cleared while the rest of the record,
/// including accumulated progress, is preserved.
///
/// Expected: Ok with active set to false and progress intact
#[tokio::test]
async fn deactivates_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .experience(300)
        .level(2)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.set_active(123456789, false).await?;

    let user = repo.find_by_discord_id(123456789).await?.unwrap();
    assert!(!user.active);
    assert_eq!(user.experience, 300);
    assert_eq!(user.level, 2);

    Ok(())
}

/// Tests setting the active flag for a non-existent user.
///
/// Verifies that the update is a no-op rather than an error when no user row
/// matches the Discord ID.
///
/// Expected: Ok(())
#[tokio::test]
async fn succeeds_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_active(999999999, false).await;

    assert!(result.is_ok());

    Ok(())
}
