use super::*;

/// Tests that the listing is ordered soonest first.
///
/// Expected: Ok(vec) ordered by datetime
#[tokio::test]
async fn orders_by_datetime() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scenario = factory::helpers::create_appointment_scenario(db).await?;
    let earlier = factory::appointment::AppointmentFactory::new(
        db,
        scenario.pet.pet_id,
        scenario.vet.clinic.clinic_id,
        scenario.vet.veterinarian.veterinarian_id,
    )
    .datetime((Utc::now() - Duration::days(3)).naive_utc())
    .build()
    .await?;

    let repo = AppointmentRepository::new(db);
    let all = repo.get_filtered(AppointmentFilter::All).await?;

    let ids: Vec<i32> = all.iter().map(|a| a.appointment_id).collect();
    assert_eq!(
        ids,
        vec![earlier.appointment_id, scenario.appointment.appointment_id]
    );

    Ok(())
}

/// Tests filtering by veterinarian and by pet.
///
/// Expected: Ok(vec) holding only the matching appointments
#[tokio::test]
async fn filters_by_veterinarian_and_pet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::helpers::create_appointment_scenario(db).await?;
    let second = factory::helpers::create_appointment_scenario(db).await?;

    let repo = AppointmentRepository::new(db);

    let by_vet = repo
        .get_filtered(AppointmentFilter::Veterinarians(&[
            first.vet.veterinarian.veterinarian_id,
        ]))
        .await?;
    assert_eq!(by_vet.len(), 1);
    assert_eq!(by_vet[0].appointment_id, first.appointment.appointment_id);

    let by_pet = repo
        .get_filtered(AppointmentFilter::Pets(&[second.pet.pet_id]))
        .await?;
    assert_eq!(by_pet.len(), 1);
    assert_eq!(by_pet[0].appointment_id, second.appointment.appointment_id);

    Ok(())
}

/// Tests that an empty id list matches nothing rather than everything.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn empty_ids_match_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_appointment_scenario(db).await?;

    let repo = AppointmentRepository::new(db);

    assert!(repo
        .get_filtered(AppointmentFilter::Veterinarians(&[]))
        .await?
        .is_empty());
    assert!(repo.get_filtered(AppointmentFilter::Pets(&[])).await?.is_empty());

    Ok(())
}
