use super::*;

/// Tests changing the status of an appointment.
///
/// Expected: Ok(true) and the new status is stored
#[tokio::test]
async fn changes_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scenario = factory::helpers::create_appointment_scenario(db).await?;

    let repo = AppointmentRepository::new(db);
    let changed = repo
        .update_status(scenario.appointment.appointment_id, "completed")
        .await?;

    assert!(changed);
    let stored = repo
        .find_by_id(scenario.appointment.appointment_id)
        .await?
        .unwrap();
    assert_eq!(stored.status, "completed");

    Ok(())
}

/// Tests changing the status of a missing appointment.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AppointmentRepository::new(db);

    assert!(!repo.update_status(77, "cancelled").await?);

    Ok(())
}
