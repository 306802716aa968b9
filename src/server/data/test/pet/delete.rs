use super::*;

/// Tests that deleting a pet removes its ownership rows, appointments and their
/// treatment records.
///
/// Expected: Ok(true) and no dependent rows left
#[tokio::test]
async fn deletes_pet_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scenario = factory::helpers::create_appointment_scenario(db).await?;
    factory::create_treatment(db, scenario.appointment.appointment_id).await?;

    let repo = PetRepository::new(db);
    let deleted = repo.delete(scenario.pet.pet_id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(scenario.pet.pet_id).await?.is_none());

    let owners = entity::prelude::PetOwner::find()
        .filter(entity::pet_owner::Column::PetId.eq(scenario.pet.pet_id))
        .count(db)
        .await?;
    assert_eq!(owners, 0);

    let appointments = entity::prelude::Appointment::find().count(db).await?;
    assert_eq!(appointments, 0);

    let treatments = entity::prelude::TreatmentRecord::find().count(db).await?;
    assert_eq!(treatments, 0);

    Ok(())
}

/// Tests that other pets and their appointments survive a delete.
///
/// Expected: Ok(true) with the unrelated appointment still stored
#[tokio::test]
async fn leaves_other_pets_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scenario = factory::helpers::create_appointment_scenario(db).await?;
    let other = factory::create_pet(db).await?;

    let repo = PetRepository::new(db);
    assert!(repo.delete(other.pet_id).await?);

    let appointments = entity::prelude::Appointment::find().count(db).await?;
    assert_eq!(appointments, 1);
    assert!(repo.find_by_id(scenario.pet.pet_id).await?.is_some());

    Ok(())
}

/// Tests deleting a pet id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PetRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}
