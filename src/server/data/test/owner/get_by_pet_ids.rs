use super::*;

/// Tests that ownership rows come back oldest first, so the first row per pet is its
/// original owner.
///
/// Expected: Ok(rows) ordered by owner id
#[tokio::test]
async fn returns_rows_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first_owner = factory::create_user(db).await?;
    let second_owner = factory::create_user(db).await?;
    let (pet, first_link) = factory::create_owned_pet(db, first_owner.user_id).await?;

    let repo = OwnerRepository::new(db);
    repo.create(CreateOwnerParam {
        address: "2 Second Street".to_string(),
        user_id: second_owner.user_id,
        pet_id: pet.pet_id,
    })
    .await?;

    let rows = repo.get_by_pet_ids(&[pet.pet_id]).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].owner_id, first_link.owner_id);
    assert_eq!(rows[0].user_id, first_owner.user_id);
    assert_eq!(rows[1].user_id, second_owner.user_id);

    Ok(())
}

/// Tests the empty id slice short-circuit.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OwnerRepository::new(db);

    assert!(repo.get_by_pet_ids(&[]).await?.is_empty());

    Ok(())
}
