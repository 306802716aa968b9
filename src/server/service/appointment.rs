//! Appointment booking and management.
//!
//! Listings are scoped by role: admins see everything, veterinarians the appointments
//! assigned to their license, and owners the appointments of their pets.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::auth::Role,
    server::{
        data::{
            appointment::{AppointmentFilter, AppointmentRepository},
            clinic::ClinicRepository,
            owner::OwnerRepository,
            pet::PetRepository,
            user::UserRepository,
            veterinarian::VeterinarianRepository,
        },
        error::{domain::DomainError, AppError},
        model::{
            appointment::{
                Appointment, AppointmentDetail, CreateAppointmentParam, UpdateAppointmentParam,
            },
            auth::{Identity, Scope},
        },
        pool::transaction,
        service::{validator::DomainValidator, veterinarian::veterinarian_labels},
    },
};

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books an appointment.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - Created appointment
    /// - `Err(DomainError::NotOwner)` - Owner caller booking for a pet they do not own
    /// - `Err(AppError::NotFound)` - Admin caller named a missing pet
    /// - `Err(DomainError::InvalidAssignment)` - Veterinarian not assigned to the clinic
    pub async fn create(
        &self,
        caller: &Identity,
        param: CreateAppointmentParam,
    ) -> Result<Appointment, AppError> {
        let txn = self.db.begin().await?;
        let result = book(&txn, caller, param).await;

        transaction::finish(txn, result).await
    }

    /// Appointments visible to the caller, soonest first.
    pub async fn get_visible(&self, caller: &Identity) -> Result<Vec<AppointmentDetail>, AppError> {
        let repo = AppointmentRepository::new(self.db);

        let appointments = match caller.scope() {
            Scope::All => repo.get_filtered(AppointmentFilter::All).await?,
            Scope::Veterinarian(user_id) => {
                let vet_ids = VeterinarianRepository::new(self.db)
                    .ids_for_user(user_id)
                    .await?;
                repo.get_filtered(AppointmentFilter::Veterinarians(&vet_ids))
                    .await?
            }
            Scope::Owner(user_id) => {
                let pet_ids = OwnerRepository::new(self.db)
                    .pet_ids_for_user(user_id)
                    .await?;
                repo.get_filtered(AppointmentFilter::Pets(&pet_ids)).await?
            }
        };

        with_details(self.db, appointments).await
    }

    /// One appointment, if it exists and the caller may see it.
    pub async fn get_visible_by_id(
        &self,
        caller: &Identity,
        appointment_id: i32,
    ) -> Result<Option<AppointmentDetail>, AppError> {
        let Some(appointment) = AppointmentRepository::new(self.db)
            .find_by_id(appointment_id)
            .await?
        else {
            return Ok(None);
        };

        let visible = match caller.scope() {
            Scope::All => true,
            Scope::Veterinarian(user_id) => VeterinarianRepository::new(self.db)
                .ids_for_user(user_id)
                .await?
                .contains(&appointment.veterinarian_id),
            Scope::Owner(user_id) => {
                OwnerRepository::new(self.db)
                    .exists(user_id, appointment.pet_id)
                    .await?
            }
        };

        if !visible {
            return Ok(None);
        }

        Ok(with_details(self.db, vec![appointment]).await?.pop())
    }

    /// Sets the status of an appointment.
    ///
    /// Veterinarians may only change appointments assigned to them.
    pub async fn update_status(
        &self,
        caller: &Identity,
        appointment_id: i32,
        status: String,
    ) -> Result<(), AppError> {
        let status = status.trim().to_string();
        if status.is_empty() {
            return Err(AppError::BadRequest("Status required".to_string()));
        }

        let txn = self.db.begin().await?;
        let result = change_status(&txn, caller, appointment_id, &status).await;

        transaction::finish(txn, result).await
    }

    /// Applies a partial update.
    ///
    /// A change to either the clinic or the veterinarian re-checks the pairing, taking the
    /// unchanged side from the stored appointment.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - Updated appointment
    /// - `Err(DomainError::NoFieldsToUpdate)` - Nothing to change
    /// - `Err(AppError::NotFound)` - No such appointment, or the new pet is missing
    /// - `Err(DomainError::NotOwner)` - Veterinarian caller not assigned to it
    /// - `Err(DomainError::InvalidAssignment)` - Resulting pair is not assigned
    pub async fn update(
        &self,
        caller: &Identity,
        appointment_id: i32,
        param: UpdateAppointmentParam,
    ) -> Result<Appointment, AppError> {
        if param.is_empty() {
            return Err(DomainError::NoFieldsToUpdate.into());
        }

        let txn = self.db.begin().await?;
        let result = reschedule(&txn, caller, appointment_id, param).await;

        transaction::finish(txn, result).await
    }
}

fn appointment_not_found() -> AppError {
    AppError::NotFound("Appointment not found".to_string())
}

async fn book<C: ConnectionTrait>(
    db: &C,
    caller: &Identity,
    param: CreateAppointmentParam,
) -> Result<Appointment, AppError> {
    let validator = DomainValidator::new(db);

    if caller.is_admin() {
        if PetRepository::new(db).find_by_id(param.pet_id).await?.is_none() {
            return Err(AppError::NotFound("Pet not found".to_string()));
        }
    } else {
        validator
            .validate_ownership(caller.user_id, param.pet_id)
            .await?;
    }

    validator
        .validate_vet_clinic_pairing(param.veterinarian_id, param.clinic_id)
        .await?;

    Ok(AppointmentRepository::new(db).create(param).await?)
}

async fn change_status<C: ConnectionTrait>(
    db: &C,
    caller: &Identity,
    appointment_id: i32,
    status: &str,
) -> Result<(), AppError> {
    let repo = AppointmentRepository::new(db);

    if repo.find_by_id(appointment_id).await?.is_none() {
        return Err(appointment_not_found());
    }

    if caller.role == Role::Veterinarian {
        DomainValidator::new(db)
            .validate_appointment_assignment(caller.user_id, appointment_id)
            .await?;
    }

    if !repo.update_status(appointment_id, status).await? {
        return Err(appointment_not_found());
    }

    Ok(())
}

async fn reschedule<C: ConnectionTrait>(
    db: &C,
    caller: &Identity,
    appointment_id: i32,
    param: UpdateAppointmentParam,
) -> Result<Appointment, AppError> {
    let repo = AppointmentRepository::new(db);
    let validator = DomainValidator::new(db);

    let Some(stored) = repo.find_by_id(appointment_id).await? else {
        return Err(appointment_not_found());
    };

    if caller.role == Role::Veterinarian {
        validator
            .validate_appointment_assignment(caller.user_id, appointment_id)
            .await?;
    }

    if let Some(pet_id) = param.pet_id {
        if PetRepository::new(db).find_by_id(pet_id).await?.is_none() {
            return Err(AppError::NotFound("Pet not found".to_string()));
        }
    }

    if param.changes_pairing() {
        validator
            .validate_vet_clinic_pairing(
                param.veterinarian_id.unwrap_or(stored.veterinarian_id),
                param.clinic_id.unwrap_or(stored.clinic_id),
            )
            .await?;
    }

    repo.update(appointment_id, param)
        .await?
        .ok_or_else(appointment_not_found)
}

/// Attaches pet, clinic, owner and veterinarian names in a fixed number of queries.
///
/// The owner shown is the earliest ownership link of the pet.
async fn with_details<C: ConnectionTrait>(
    db: &C,
    appointments: Vec<Appointment>,
) -> Result<Vec<AppointmentDetail>, AppError> {
    let pet_ids: Vec<i32> = appointments.iter().map(|a| a.pet_id).collect();
    let clinic_ids: Vec<i32> = appointments.iter().map(|a| a.clinic_id).collect();
    let vet_ids: Vec<i32> = appointments.iter().map(|a| a.veterinarian_id).collect();

    let pets: HashMap<i32, String> = PetRepository::new(db)
        .get_by_ids(&pet_ids)
        .await?
        .into_iter()
        .map(|p| (p.pet_id, p.name))
        .collect();
    let clinics = ClinicRepository::new(db).get_by_ids(&clinic_ids).await?;
    let vets = veterinarian_labels(db, &vet_ids).await?;

    let mut first_owner: HashMap<i32, i32> = HashMap::new();
    for owner in OwnerRepository::new(db).get_by_pet_ids(&pet_ids).await? {
        first_owner.entry(owner.pet_id).or_insert(owner.user_id);
    }
    let owner_user_ids: Vec<i32> = first_owner.values().copied().collect();
    let owner_users = UserRepository::new(db).get_by_ids(&owner_user_ids).await?;

    let details = appointments
        .into_iter()
        .map(|appointment| {
            let vet = vets.get(&appointment.veterinarian_id);
            let owner_name = first_owner
                .get(&appointment.pet_id)
                .and_then(|user_id| owner_users.get(user_id))
                .map(|user| user.full_name());

            AppointmentDetail {
                pet_name: pets.get(&appointment.pet_id).cloned().unwrap_or_default(),
                clinic_name: clinics
                    .get(&appointment.clinic_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_default(),
                owner_name,
                license_no: vet.map(|v| v.license_no.clone()).unwrap_or_default(),
                vet_name: vet.and_then(|v| v.name.clone()),
                appointment,
            }
        })
        .collect();

    Ok(details)
}
