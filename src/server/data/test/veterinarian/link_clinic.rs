use super::*;

/// Tests assigning a veterinarian to a clinic twice.
///
/// Expected: Ok(true) then Ok(false), and the pair is linked
#[tokio::test]
async fn linking_twice_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vet = factory::create_veterinarian(db).await?;
    let clinic = factory::create_clinic(db).await?;

    let repo = VeterinarianRepository::new(db);
    assert!(repo.link_clinic(vet.veterinarian_id, clinic.clinic_id).await?);
    assert!(!repo.link_clinic(vet.veterinarian_id, clinic.clinic_id).await?);

    assert!(repo.is_linked(vet.veterinarian_id, clinic.clinic_id).await?);

    Ok(())
}

/// Tests relinking an existing pair inside a transaction that also writes other rows.
///
/// The conflicting link must not poison the transaction: the commit succeeds and the
/// row inserted alongside it is persisted.
///
/// Expected: Ok(false) for the link, commit Ok, new license row present afterwards
#[tokio::test]
async fn relink_inside_transaction_keeps_other_writes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::helpers::create_vet_account(db).await?;

    let txn = db.begin().await?;
    let repo = VeterinarianRepository::new(&txn);
    repo.create("VET-TXN", None).await?;
    let linked = repo
        .link_clinic(account.veterinarian.veterinarian_id, account.clinic.clinic_id)
        .await?;
    txn.commit().await?;

    assert!(!linked);
    let repo = VeterinarianRepository::new(db);
    assert!(repo.find_by_license("VET-TXN").await?.is_some());
    assert!(
        repo.is_linked(account.veterinarian.veterinarian_id, account.clinic.clinic_id)
            .await?
    );

    Ok(())
}

/// Tests that a link to one clinic says nothing about another.
///
/// Expected: Ok(false) for the unlinked clinic
#[tokio::test]
async fn unlinked_clinic_is_not_linked() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_clinic_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::helpers::create_vet_account(db).await?;
    let other = factory::create_clinic(db).await?;

    let repo = VeterinarianRepository::new(db);

    assert!(
        repo.is_linked(account.veterinarian.veterinarian_id, account.clinic.clinic_id)
            .await?
    );
    assert!(
        !repo.is_linked(account.veterinarian.veterinarian_id, other.clinic_id)
            .await?
    );

    Ok(())
}
