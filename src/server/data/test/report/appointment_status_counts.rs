use super::*;

/// Tests counting appointments per status.
///
/// Expected: Ok(vec) with one row per status, ordered by status
#[tokio::test]
async fn counts_per_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scenario = factory::helpers::create_appointment_scenario(db).await?;
    for status in ["completed", "completed"] {
        factory::appointment::AppointmentFactory::new(
            db,
            scenario.pet.pet_id,
            scenario.vet.clinic.clinic_id,
            scenario.vet.veterinarian.veterinarian_id,
        )
        .status(status)
        .build()
        .await?;
    }

    let repo = ReportRepository::new(db);
    let counts = repo.appointment_status_counts().await?;

    let rows: Vec<(String, i64)> = counts.into_iter().map(|c| (c.status, c.total)).collect();
    assert_eq!(
        rows,
        vec![("completed".to_string(), 2), ("scheduled".to_string(), 1)]
    );

    Ok(())
}

/// Tests the report with no appointments.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn empty_without_appointments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReportRepository::new(db);

    assert!(repo.appointment_status_counts().await?.is_empty());

    Ok(())
}
