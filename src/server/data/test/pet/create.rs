use super::*;

/// Tests inserting a pet with every optional field set.
///
/// Expected: Ok(Pet) with the stored values and a generated id
#[tokio::test]
async fn creates_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);
    let pet = repo
        .create(&CreatePetParam {
            name: "Milo".to_string(),
            species: "cat".to_string(),
            breed: Some("siamese".to_string()),
            gender: "male".to_string(),
            birth_date: None,
            age: Some(2),
            address: "4 Elm Street".to_string(),
        })
        .await?;

    assert!(pet.pet_id > 0);
    assert_eq!(pet.name, "Milo");
    assert_eq!(pet.breed.as_deref(), Some("siamese"));
    assert_eq!(pet.age, Some(2));

    let stored = repo.find_by_id(pet.pet_id).await?;
    assert_eq!(stored, Some(pet));

    Ok(())
}
