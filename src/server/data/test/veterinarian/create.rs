use super::*;

/// Tests inserting an unclaimed license.
///
/// Expected: Ok(Veterinarian) without a user, found again by license number
#[tokio::test]
async fn creates_unclaimed_license() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VeterinarianRepository::new(db);
    let vet = repo.create("LIC-42", None).await?;

    assert_eq!(vet.license_no, "LIC-42");
    assert!(vet.user_id.is_none());
    assert_eq!(repo.find_by_license("LIC-42").await?, Some(vet));

    Ok(())
}

/// Tests that the license number is unique.
///
/// Expected: Err(DbErr) recognised as a unique violation
#[tokio::test]
async fn rejects_duplicate_license() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VeterinarianRepository::new(db);
    repo.create("LIC-7", None).await?;

    let result = repo.create("LIC-7", None).await;

    assert!(matches!(result, Err(ref err) if is_unique_violation_on(err, "license_no")));
    assert!(!matches!(result, Err(ref err) if is_unique_violation_on(err, "user_id")));

    Ok(())
}

/// Tests that one user cannot hold two licenses.
///
/// Expected: Err(DbErr) attributed to the `user_id` index, not `license_no`
#[tokio::test]
async fn rejects_second_license_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_role(db, "veterinarian").await?;

    let repo = VeterinarianRepository::new(db);
    repo.create("LIC-8", Some(user.user_id)).await?;

    let result = repo.create("LIC-9", Some(user.user_id)).await;

    assert!(matches!(result, Err(ref err) if is_unique_violation(err)));
    assert!(matches!(result, Err(ref err) if is_unique_violation_on(err, "user_id")));
    assert!(!matches!(result, Err(ref err) if is_unique_violation_on(err, "license_no")));

    Ok(())
}
