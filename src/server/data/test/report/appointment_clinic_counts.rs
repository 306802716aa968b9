use super::*;

/// Tests counting appointments per clinic.
///
/// Expected: Ok(vec) naming only clinics that have appointments
#[tokio::test]
async fn counts_per_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scenario = factory::helpers::create_appointment_scenario(db).await?;
    factory::create_appointment(
        db,
        scenario.pet.pet_id,
        scenario.vet.clinic.clinic_id,
        scenario.vet.veterinarian.veterinarian_id,
    )
    .await?;
    factory::create_clinic(db).await?;

    let repo = ReportRepository::new(db);
    let counts = repo.appointment_clinic_counts().await?;

    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].clinic, scenario.vet.clinic.name);
    assert_eq!(counts[0].total, 2);

    Ok(())
}
