use super::*;

/// Tests giving a new account its role.
///
/// Expected: Ok(true) and the stored role name matches
#[tokio::test]
async fn assigns_seeded_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .without_role()
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let assigned = repo.assign_role(user.user_id, Role::Veterinarian).await?;

    assert!(assigned);
    assert_eq!(
        repo.find_role_name(user.user_id).await?.as_deref(),
        Some("veterinarian")
    );

    Ok(())
}

/// Tests that an account holds at most one role.
///
/// Expected: Err(DbErr) on the second assignment
#[tokio::test]
async fn rejects_second_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.assign_role(user.user_id, Role::Admin).await.is_err());
    assert_eq!(
        repo.find_role_name(user.user_id).await?.as_deref(),
        Some("pet_owner")
    );

    Ok(())
}
