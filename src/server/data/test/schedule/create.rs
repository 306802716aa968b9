use super::*;

/// Tests inserting a schedule entry.
///
/// Expected: Ok(Schedule) listed for the veterinarian
#[tokio::test]
async fn creates_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vet = factory::create_veterinarian(db).await?;

    let repo = ScheduleRepository::new(db);
    let entry = repo.create(&monday_shift(vet.veterinarian_id)).await?;

    assert_eq!(entry.day, "monday");
    assert_eq!(entry.time_start, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    assert_eq!(repo.get_by_veterinarian(vet.veterinarian_id).await?, vec![entry]);

    Ok(())
}

/// Tests the one-entry-per-weekday index.
///
/// Expected: Err(DbErr) recognised as a unique violation
#[tokio::test]
async fn rejects_second_entry_on_same_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vet = factory::create_veterinarian(db).await?;

    let repo = ScheduleRepository::new(db);
    repo.create(&monday_shift(vet.veterinarian_id)).await?;

    let result = repo.create(&monday_shift(vet.veterinarian_id)).await;

    assert!(matches!(result, Err(ref err) if is_unique_violation(err)));

    Ok(())
}

/// Tests that two veterinarians may both work on Monday.
///
/// Expected: Ok(Schedule) for each
#[tokio::test]
async fn allows_same_day_for_different_veterinarians() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_veterinarian(db).await?;
    let second = factory::create_veterinarian(db).await?;

    let repo = ScheduleRepository::new(db);
    repo.create(&monday_shift(first.veterinarian_id)).await?;
    repo.create(&monday_shift(second.veterinarian_id)).await?;

    assert_eq!(repo.get_by_veterinarian(second.veterinarian_id).await?.len(), 1);

    Ok(())
}
