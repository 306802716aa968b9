use super::*;
use crate::server::{
    model::appointment::{CreateAppointmentParam, UpdateAppointmentParam, DEFAULT_STATUS},
    service::appointment::AppointmentService,
};

fn booking(pet_id: i32, clinic_id: i32, veterinarian_id: i32) -> CreateAppointmentParam {
    CreateAppointmentParam {
        datetime: (Utc::now() + chrono::Duration::days(2)).naive_utc(),
        status: DEFAULT_STATUS.to_string(),
        pet_id,
        clinic_id,
        veterinarian_id,
    }
}

/// Tests booking with a veterinarian who does not work at the clinic.
///
/// Expected: InvalidAssignment and nothing stored
#[tokio::test]
async fn booking_requires_vet_at_clinic() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let (pet, _) = factory::create_owned_pet(db, owner.user_id).await?;
    let vet = factory::helpers::create_vet_account(db).await?;
    let elsewhere = factory::create_clinic(db).await?;
    let owner_caller = caller(owner.user_id, Role::PetOwner);

    let service = AppointmentService::new(db);
    let err = domain_err(
        service
            .create(
                &owner_caller,
                booking(pet.pet_id, elsewhere.clinic_id, vet.veterinarian.veterinarian_id),
            )
            .await,
    );
    assert!(matches!(err, DomainError::InvalidAssignment { .. }));
    assert!(service.get_visible(&owner_caller).await?.is_empty());

    let booked = service
        .create(
            &owner_caller,
            booking(pet.pet_id, vet.clinic.clinic_id, vet.veterinarian.veterinarian_id),
        )
        .await?;
    assert_eq!(booked.status, "scheduled");

    Ok(())
}

/// Tests booking for somebody else's pet.
///
/// Expected: NotOwner("pets")
#[tokio::test]
async fn booking_requires_pet_ownership() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let (pet, _) = factory::create_owned_pet(db, owner.user_id).await?;
    let vet = factory::helpers::create_vet_account(db).await?;

    let err = domain_err(
        AppointmentService::new(db)
            .create(
                &caller(stranger.user_id, Role::PetOwner),
                booking(pet.pet_id, vet.clinic.clinic_id, vet.veterinarian.veterinarian_id),
            )
            .await,
    );

    assert_eq!(err, DomainError::NotOwner("pets"));

    Ok(())
}

/// Tests which appointments each role sees.
///
/// Expected: admin all, each veterinarian and owner only their own
#[tokio::test]
async fn listing_is_scoped_by_role() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let first = factory::helpers::create_appointment_scenario(db).await?;
    let second = factory::helpers::create_appointment_scenario(db).await?;
    let admin = factory::create_user_with_role(db, "admin").await?;

    let service = AppointmentService::new(db);

    let all = service.get_visible(&caller(admin.user_id, Role::Admin)).await?;
    assert_eq!(all.len(), 2);

    let vets = service
        .get_visible(&caller(first.vet.user.user_id, Role::Veterinarian))
        .await?;
    assert_eq!(vets.len(), 1);
    assert_eq!(
        vets[0].appointment.appointment_id,
        first.appointment.appointment_id
    );

    let owners = service
        .get_visible(&caller(second.owner.user_id, Role::PetOwner))
        .await?;
    assert_eq!(owners.len(), 1);
    assert_eq!(
        owners[0].appointment.appointment_id,
        second.appointment.appointment_id
    );

    assert!(service
        .get_visible_by_id(
            &caller(second.owner.user_id, Role::PetOwner),
            first.appointment.appointment_id
        )
        .await?
        .is_none());

    Ok(())
}

/// Tests the names attached to a listed appointment.
///
/// Expected: pet, clinic, owner and license filled in
#[tokio::test]
async fn listing_carries_display_names() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let scenario = factory::helpers::create_appointment_scenario(db).await?;

    let detail = AppointmentService::new(db)
        .get_visible_by_id(
            &caller(scenario.owner.user_id, Role::PetOwner),
            scenario.appointment.appointment_id,
        )
        .await?
        .unwrap();

    assert_eq!(detail.pet_name, scenario.pet.name);
    assert_eq!(detail.clinic_name, scenario.vet.clinic.name);
    assert_eq!(detail.license_no, scenario.vet.veterinarian.license_no);
    assert!(detail.owner_name.is_some());
    assert!(detail.vet_name.is_some());

    Ok(())
}

/// Tests status changes by an unassigned and by the assigned veterinarian.
///
/// Expected: NotOwner for the colleague, Ok for the assigned veterinarian
#[tokio::test]
async fn only_assigned_vet_changes_status() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let scenario = factory::helpers::create_appointment_scenario(db).await?;
    let colleague = factory::helpers::create_vet_account(db).await?;
    let appointment_id = scenario.appointment.appointment_id;

    let service = AppointmentService::new(db);

    let err = domain_err(
        service
            .update_status(
                &caller(colleague.user.user_id, Role::Veterinarian),
                appointment_id,
                "completed".to_string(),
            )
            .await,
    );
    assert_eq!(err, DomainError::NotOwner("appointments"));

    let vet_caller = caller(scenario.vet.user.user_id, Role::Veterinarian);
    service
        .update_status(&vet_caller, appointment_id, "completed".to_string())
        .await?;

    let detail = service
        .get_visible_by_id(&vet_caller, appointment_id)
        .await?
        .unwrap();
    assert_eq!(detail.appointment.status, "completed");

    Ok(())
}

/// Tests a blank status and a missing appointment.
///
/// Expected: BadRequest, then NotFound
#[tokio::test]
async fn status_change_input_errors() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user_with_role(db, "admin").await?;
    let admin_caller = caller(admin.user_id, Role::Admin);

    let service = AppointmentService::new(db);

    let blank = service.update_status(&admin_caller, 1, "  ".to_string()).await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    let missing = service
        .update_status(&admin_caller, 404, "cancelled".to_string())
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests moving an appointment to a clinic its veterinarian does not work at.
///
/// Expected: InvalidAssignment and the stored clinic unchanged
#[tokio::test]
async fn update_rechecks_pairing() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let scenario = factory::helpers::create_appointment_scenario(db).await?;
    let admin = factory::create_user_with_role(db, "admin").await?;
    let elsewhere = factory::create_clinic(db).await?;
    let admin_caller = caller(admin.user_id, Role::Admin);
    let appointment_id = scenario.appointment.appointment_id;

    let service = AppointmentService::new(db);

    let err = domain_err(
        service
            .update(
                &admin_caller,
                appointment_id,
                UpdateAppointmentParam {
                    clinic_id: Some(elsewhere.clinic_id),
                    ..Default::default()
                },
            )
            .await,
    );
    assert!(matches!(err, DomainError::InvalidAssignment { .. }));

    let empty = domain_err(
        service
            .update(&admin_caller, appointment_id, UpdateAppointmentParam::default())
            .await,
    );
    assert_eq!(empty, DomainError::NoFieldsToUpdate);

    let detail = service
        .get_visible_by_id(&admin_caller, appointment_id)
        .await?
        .unwrap();
    assert_eq!(detail.appointment.clinic_id, scenario.vet.clinic.clinic_id);

    Ok(())
}
