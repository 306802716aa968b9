use super::*;
use crate::server::{model::pet::UpdatePetParam, service::pet::PetService};

fn rename(name: &str) -> UpdatePetParam {
    UpdatePetParam {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

/// Tests that only the linked owner may update a pet.
///
/// Expected: NotOwner for owner B, Ok for owner A
#[tokio::test]
async fn only_owner_updates_pet() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let (pet, _) = factory::create_owned_pet(db, alice.user_id).await?;

    let service = PetService::new(db);

    let err = domain_err(
        service
            .update(&caller(bob.user_id, Role::PetOwner), pet.pet_id, rename("Stolen"))
            .await,
    );
    assert_eq!(err, DomainError::NotOwner("pets"));

    let updated = service
        .update(&caller(alice.user_id, Role::PetOwner), pet.pet_id, rename("Biscuit"))
        .await?;
    assert_eq!(updated.name, "Biscuit");

    Ok(())
}

/// Tests that an admin updating a missing pet gets not found.
///
/// Expected: AppError::NotFound
#[tokio::test]
async fn admin_update_of_missing_pet_is_not_found() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user_with_role(db, "admin").await?;

    let result = PetService::new(db)
        .update(&caller(admin.user_id, Role::Admin), 404, rename("Nobody"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests an update without any field.
///
/// Expected: NoFieldsToUpdate
#[tokio::test]
async fn empty_update_is_rejected() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let (pet, _) = factory::create_owned_pet(db, owner.user_id).await?;

    let err = domain_err(
        PetService::new(db)
            .update(
                &caller(owner.user_id, Role::PetOwner),
                pet.pet_id,
                UpdatePetParam::default(),
            )
            .await,
    );

    assert_eq!(err, DomainError::NoFieldsToUpdate);

    Ok(())
}

/// Tests listing scope per role.
///
/// Expected: owners see their own pets, admins see all, veterinarians see none by id
#[tokio::test]
async fn listing_is_scoped_by_role() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let admin = factory::create_user_with_role(db, "admin").await?;
    let vet = factory::create_user_with_role(db, "veterinarian").await?;
    let (alices, _) = factory::create_owned_pet(db, alice.user_id).await?;
    factory::create_owned_pet(db, bob.user_id).await?;

    let service = PetService::new(db);

    let own = service
        .get_visible(&caller(alice.user_id, Role::PetOwner))
        .await?;
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].pet_id, alices.pet_id);

    let all = service.get_visible(&caller(admin.user_id, Role::Admin)).await?;
    assert_eq!(all.len(), 2);

    assert!(service
        .get_visible_by_id(&caller(bob.user_id, Role::PetOwner), alices.pet_id)
        .await?
        .is_none());
    assert!(service
        .get_visible_by_id(&caller(vet.user_id, Role::Veterinarian), alices.pet_id)
        .await?
        .is_none());

    Ok(())
}

/// Tests that deleting is owner-only and removes the pet.
///
/// Expected: NotOwner for a stranger, then Ok for the owner and the pet is gone
#[tokio::test]
async fn owner_deletes_pet() -> Result<(), AppError> {
    let test = clinic_db().await;
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let (pet, _) = factory::create_owned_pet(db, owner.user_id).await?;

    let service = PetService::new(db);
    let owner_caller = caller(owner.user_id, Role::PetOwner);

    let err = domain_err(
        service
            .delete(&caller(stranger.user_id, Role::PetOwner), pet.pet_id)
            .await,
    );
    assert_eq!(err, DomainError::NotOwner("pets"));

    service.delete(&owner_caller, pet.pet_id).await?;

    assert!(service
        .get_visible_by_id(&owner_caller, pet.pet_id)
        .await?
        .is_none());

    Ok(())
}
