use super::*;

/// Tests linking a user to a pet.
///
/// Expected: Ok(Owner) and `exists` reports the pair
#[tokio::test]
async fn links_user_to_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let pet = factory::create_pet(db).await?;

    let repo = OwnerRepository::new(db);
    let owner = repo
        .create(CreateOwnerParam {
            address: "9 Birch Road".to_string(),
            user_id: user.user_id,
            pet_id: pet.pet_id,
        })
        .await?;

    assert_eq!(owner.user_id, user.user_id);
    assert_eq!(owner.pet_id, pet.pet_id);
    assert!(repo.exists(user.user_id, pet.pet_id).await?);
    assert_eq!(repo.user_ids_for_pet(pet.pet_id).await?, vec![user.user_id]);

    Ok(())
}

/// Tests that `exists` is specific to the user and pet pair.
///
/// Expected: Ok(false) for another user's pet
#[tokio::test]
async fn other_users_pet_is_not_owned() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let (pet, _) = factory::create_owned_pet(db, alice.user_id).await?;

    let repo = OwnerRepository::new(db);

    assert!(repo.exists(alice.user_id, pet.pet_id).await?);
    assert!(!repo.exists(bob.user_id, pet.pet_id).await?);

    Ok(())
}
