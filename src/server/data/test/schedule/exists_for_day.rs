use super::*;

/// Tests that the day lookup ignores case.
///
/// Expected: Ok(true) for "Monday" against a stored "monday"
#[tokio::test]
async fn matches_day_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vet = factory::create_veterinarian(db).await?;
    factory::create_schedule(db, vet.veterinarian_id, "monday").await?;

    let repo = ScheduleRepository::new(db);

    assert!(repo.exists_for_day(vet.veterinarian_id, "Monday").await?);
    assert!(!repo.exists_for_day(vet.veterinarian_id, "tuesday").await?);

    Ok(())
}
