use super::*;

/// Tests that a partial update keeps the fields it does not name.
///
/// Expected: Ok(Some(Appointment)) with the new datetime and the old pairing
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let scenario = factory::helpers::create_appointment_scenario(db).await?;
    let moved_to = (Utc::now() + Duration::days(10)).naive_utc();

    let repo = AppointmentRepository::new(db);
    let updated = repo
        .update(
            scenario.appointment.appointment_id,
            UpdateAppointmentParam {
                datetime: Some(moved_to),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.datetime, moved_to);
    assert_eq!(updated.status, scenario.appointment.status);
    assert_eq!(updated.clinic_id, scenario.appointment.clinic_id);
    assert_eq!(
        updated.veterinarian_id,
        scenario.appointment.veterinarian_id
    );

    Ok(())
}

/// Tests updating a missing appointment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_appointment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AppointmentRepository::new(db);
    let result = repo
        .update(
            5,
            UpdateAppointmentParam {
                status: Some("cancelled".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
