use super::*;
use crate::server::{
    data::veterinarian::VeterinarianRepository,
    model::veterinarian::CreateVeterinarianParam,
    service::veterinarian::{provision_conflict, VeterinarianService},
};

/// Tests provisioning a license already on file.
///
/// Expected: LicenseExists
#[tokio::test]
async fn duplicate_license_is_rejected() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    factory::veterinarian::VeterinarianFactory::new(db)
        .license_no("DUP-1")
        .build()
        .await?;

    let err = domain_err(
        VeterinarianService::new(db)
            .create(CreateVeterinarianParam {
                license_no: "DUP-1".to_string(),
                user_id: None,
                clinic_id: None,
            })
            .await,
    );

    assert_eq!(err, DomainError::LicenseExists("DUP-1".to_string()));

    Ok(())
}

/// Tests provisioning a license for a user who already holds one.
///
/// Expected: UserAlreadyLinked
#[tokio::test]
async fn user_holds_one_license() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let account = factory::helpers::create_vet_account(db).await?;

    let err = domain_err(
        VeterinarianService::new(db)
            .create(CreateVeterinarianParam {
                license_no: "SECOND-1".to_string(),
                user_id: Some(account.user.user_id),
                clinic_id: None,
            })
            .await,
    );

    assert_eq!(err, DomainError::UserAlreadyLinked(account.user.user_id));

    Ok(())
}

/// Tests provisioning a license straight into a clinic.
///
/// Expected: Ok(Veterinarian) listed under the clinic
#[tokio::test]
async fn provisions_into_clinic() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let clinic = factory::create_clinic(db).await?;

    let service = VeterinarianService::new(db);
    let vet = service
        .create(CreateVeterinarianParam {
            license_no: "NEW-1".to_string(),
            user_id: None,
            clinic_id: Some(clinic.clinic_id),
        })
        .await?;

    let staff = service.get_by_clinic(clinic.clinic_id).await?;
    assert_eq!(staff.len(), 1);
    assert_eq!(staff[0].veterinarian, vet);
    assert!(staff[0].user.is_none());

    Ok(())
}

/// Tests listing the staff of a clinic that does not exist.
///
/// Expected: AppError::NotFound
#[tokio::test]
async fn unknown_clinic_is_not_found() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let result = VeterinarianService::new(db).get_by_clinic(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests mapping insert conflicts that slipped past the pre-checks to the losing column.
///
/// Expected: UserAlreadyLinked for a `user_id` clash, LicenseExists for a `license_no` clash
#[tokio::test]
async fn insert_conflict_names_the_clashing_column() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let account = factory::helpers::create_vet_account(db).await?;
    let repo = VeterinarianRepository::new(db);

    let user_param = CreateVeterinarianParam {
        license_no: "RACE-1".to_string(),
        user_id: Some(account.user.user_id),
        clinic_id: None,
    };
    let user_clash = repo
        .create(&user_param.license_no, user_param.user_id)
        .await
        .unwrap_err();
    let err = domain_err(Err::<(), _>(provision_conflict(user_clash, &user_param)));
    assert_eq!(err, DomainError::UserAlreadyLinked(account.user.user_id));

    let license_param = CreateVeterinarianParam {
        license_no: account.veterinarian.license_no.clone(),
        user_id: None,
        clinic_id: None,
    };
    let license_clash = repo
        .create(&license_param.license_no, None)
        .await
        .unwrap_err();
    let err = domain_err(Err::<(), _>(provision_conflict(license_clash, &license_param)));
    assert_eq!(
        err,
        DomainError::LicenseExists(account.veterinarian.license_no.clone())
    );

    Ok(())
}
