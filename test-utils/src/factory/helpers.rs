//! Shared helper utilities for factory methods.
//!
//! ID generation plus convenience methods that create an entity together with the rows it
//! depends on.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory;

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// A veterinarian account that has claimed its license and practices at one clinic.
pub struct VetAccount {
    pub user: entity::user::Model,
    pub veterinarian: entity::veterinarian::Model,
    pub clinic: entity::clinic::Model,
}

/// Every row an appointment needs, plus the appointment itself.
pub struct AppointmentScenario {
    pub owner: entity::user::Model,
    pub pet: entity::pet::Model,
    pub vet: VetAccount,
    pub appointment: entity::appointment::Model,
}

/// Creates a veterinarian user, a claimed license, and a clinic they are paired with.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(VetAccount)` - Created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_vet_account(db: &DatabaseConnection) -> Result<VetAccount, DbErr> {
    let user = factory::create_user_with_role(db, "veterinarian").await?;
    let veterinarian = factory::veterinarian::VeterinarianFactory::new(db)
        .user_id(user.user_id)
        .build()
        .await?;
    let clinic = factory::create_clinic(db).await?;
    factory::link_clinic(db, veterinarian.veterinarian_id, clinic.clinic_id).await?;

    Ok(VetAccount {
        user,
        veterinarian,
        clinic,
    })
}

/// Creates an owner with a pet, a veterinarian account, and a scheduled appointment that
/// ties them together at the veterinarian's clinic.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(AppointmentScenario)` - Created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_appointment_scenario(
    db: &DatabaseConnection,
) -> Result<AppointmentScenario, DbErr> {
    let owner = factory::create_user(db).await?;
    let (pet, _) = factory::create_owned_pet(db, owner.user_id).await?;
    let vet = create_vet_account(db).await?;
    let appointment = factory::create_appointment(
        db,
        pet.pet_id,
        vet.clinic.clinic_id,
        vet.veterinarian.veterinarian_id,
    )
    .await?;

    Ok(AppointmentScenario {
        owner,
        pet,
        vet,
        appointment,
    })
}
