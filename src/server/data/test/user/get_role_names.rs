use super::*;

/// Tests looking up several users' roles at once.
///
/// Expected: Ok(map) keyed by user id, without users lacking a role
#[tokio::test]
async fn maps_users_to_role_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let admin = factory::create_user_with_role(db, "admin").await?;
    let roleless = factory::user::UserFactory::new(db)
        .without_role()
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let roles = repo
        .get_role_names(&[owner.user_id, admin.user_id, roleless.user_id])
        .await?;

    assert_eq!(roles.len(), 2);
    assert_eq!(roles.get(&owner.user_id).map(String::as_str), Some("pet_owner"));
    assert_eq!(roles.get(&admin.user_id).map(String::as_str), Some("admin"));
    assert!(!roles.contains_key(&roleless.user_id));

    Ok(())
}
