use super::*;

/// Tests that a partial update only touches the supplied fields.
///
/// Expected: Ok(Some(Pet)) with the new name and the old species
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pet = factory::create_pet(db).await?;

    let repo = PetRepository::new(db);
    let updated = repo
        .update(
            pet.pet_id,
            UpdatePetParam {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.species, pet.species);
    assert_eq!(updated.age, pet.age);

    Ok(())
}

/// Tests updating a pet id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);
    let result = repo
        .update(
            999,
            UpdatePetParam {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
