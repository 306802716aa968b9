use super::*;

/// Tests listing the veterinarians of one clinic.
///
/// Expected: Ok(vec) with only the assigned veterinarians, ordered by id
#[tokio::test]
async fn returns_assigned_veterinarians() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;
    let first = factory::create_veterinarian(db).await?;
    let second = factory::create_veterinarian(db).await?;
    factory::create_veterinarian(db).await?;
    factory::link_clinic(db, second.veterinarian_id, clinic.clinic_id).await?;
    factory::link_clinic(db, first.veterinarian_id, clinic.clinic_id).await?;

    let repo = VeterinarianRepository::new(db);
    let vets = repo.get_by_clinic(clinic.clinic_id).await?;

    let ids: Vec<i32> = vets.iter().map(|v| v.veterinarian_id).collect();
    assert_eq!(ids, vec![first.veterinarian_id, second.veterinarian_id]);

    Ok(())
}

/// Tests a clinic with no veterinarians.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_unstaffed_clinic() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;

    let repo = VeterinarianRepository::new(db);

    assert!(repo.get_by_clinic(clinic.clinic_id).await?.is_empty());

    Ok(())
}
