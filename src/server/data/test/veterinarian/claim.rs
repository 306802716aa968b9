use super::*;

/// Tests claiming an unclaimed license.
///
/// Expected: Ok(true) and the row now points at the user
#[tokio::test]
async fn claims_unclaimed_license() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_role(db, "veterinarian").await?;
    let license = factory::create_veterinarian(db).await?;

    let repo = VeterinarianRepository::new(db);
    let claimed = repo.claim(license.veterinarian_id, user.user_id).await?;

    assert!(claimed);
    let stored = repo.find_by_user_id(user.user_id).await?.unwrap();
    assert_eq!(stored.veterinarian_id, license.veterinarian_id);
    assert_eq!(repo.ids_for_user(user.user_id).await?, vec![license.veterinarian_id]);

    Ok(())
}

/// Tests that a second claim on the same license affects no row.
///
/// Expected: Ok(false) and the first claimant keeps the license
#[tokio::test]
async fn second_claim_loses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user_with_role(db, "veterinarian").await?;
    let second = factory::create_user_with_role(db, "veterinarian").await?;
    let license = factory::create_veterinarian(db).await?;

    let repo = VeterinarianRepository::new(db);
    assert!(repo.claim(license.veterinarian_id, first.user_id).await?);
    assert!(!repo.claim(license.veterinarian_id, second.user_id).await?);

    let stored = repo.find_by_id(license.veterinarian_id).await?.unwrap();
    assert_eq!(stored.user_id, Some(first.user_id));

    Ok(())
}

/// Tests claiming a license id that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn missing_license_is_not_claimed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = VeterinarianRepository::new(db);

    assert!(!repo.claim(404, user.user_id).await?);

    Ok(())
}
