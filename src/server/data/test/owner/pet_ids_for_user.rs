use super::*;

/// Tests collecting the ids of a user's pets.
///
/// Expected: Ok(ids) in ascending order, without other users' pets
#[tokio::test]
async fn returns_only_own_pets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (first, _) = factory::create_owned_pet(db, owner.user_id).await?;
    let (second, _) = factory::create_owned_pet(db, owner.user_id).await?;
    factory::create_owned_pet(db, other.user_id).await?;

    let repo = OwnerRepository::new(db);
    let ids = repo.pet_ids_for_user(owner.user_id).await?;

    assert_eq!(ids, vec![first.pet_id, second.pet_id]);

    Ok(())
}

/// Tests a user without pets.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_user_without_pets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = OwnerRepository::new(db);

    assert!(repo.pet_ids_for_user(user.user_id).await?.is_empty());

    Ok(())
}
