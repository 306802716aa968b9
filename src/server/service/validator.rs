//! Consistency checks over fetched rows.
//!
//! Each check reads what it needs through the connection or transaction it was given and
//! fails with a `DomainError`. Database constraints back up every uniqueness rule; these
//! checks exist so callers get a specific error instead of a constraint violation.

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{
        appointment::AppointmentRepository, owner::OwnerRepository, schedule::ScheduleRepository, treatment::TreatmentRepository,
        veterinarian::VeterinarianRepository,
    },
    error::{domain::DomainError, AppError},
    model::veterinarian::Veterinarian,
};

/// Decides a license claim from the row found for `license_no`.
///
/// # Returns
/// - `Ok(i32)` - Id of the unclaimed veterinarian row
/// - `Err(DomainError::LicenseNotFound)` - No row holds the license
/// - `Err(DomainError::LicenseAlreadyClaimed)` - The row is already linked to a user
pub fn check_license_claim(
    license_no: &str,
    veterinarian: Option<&Veterinarian>,
) -> Result<i32, DomainError> {
    match veterinarian {
        None => Err(DomainError::LicenseNotFound(license_no.to_string())),
        Some(vet) if vet.is_claimed() => {
            Err(DomainError::LicenseAlreadyClaimed(license_no.to_string()))
        }
        Some(vet) => Ok(vet.veterinarian_id),
    }
}

pub struct DomainValidator<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DomainValidator<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Requires the veterinarian to exist and be assigned to the clinic.
    ///
    /// # Returns
    /// - `Ok(())` - Pair exists in `veterinarian_clinic`
    /// - `Err(DomainError::InvalidAssignment)` - Unknown veterinarian or unassigned pair
    pub async fn validate_vet_clinic_pairing(
        &self,
        veterinarian_id: i32,
        clinic_id: i32,
    ) -> Result<(), AppError> {
        let repo = VeterinarianRepository::new(self.db);

        let paired = repo.find_by_id(veterinarian_id).await?.is_some()
            && repo.is_linked(veterinarian_id, clinic_id).await?;

        if !paired {
            return Err(DomainError::InvalidAssignment {
                veterinarian_id,
                clinic_id,
            }
            .into());
        }

        Ok(())
    }

    /// Finds the unclaimed veterinarian row for a license.
    ///
    /// Only a pre-check. The claim itself must go through
    /// `VeterinarianRepository::claim`, which re-checks atomically.
    pub async fn validate_license_claim(&self, license_no: &str) -> Result<i32, AppError> {
        let vet = VeterinarianRepository::new(self.db)
            .find_by_license(license_no)
            .await?;

        Ok(check_license_claim(license_no, vet.as_ref())?)
    }

    /// Requires an ownership row tying the user to the pet.
    pub async fn validate_ownership(&self, user_id: i32, pet_id: i32) -> Result<(), AppError> {
        if !OwnerRepository::new(self.db).exists(user_id, pet_id).await? {
            return Err(DomainError::NotOwner("pets").into());
        }

        Ok(())
    }

    /// Requires the day to be free in the veterinarian's weekly schedule.
    pub async fn validate_schedule_slot(
        &self,
        veterinarian_id: i32,
        day: &str,
    ) -> Result<(), AppError> {
        if ScheduleRepository::new(self.db)
            .exists_for_day(veterinarian_id, day)
            .await?
        {
            return Err(DomainError::DuplicateSchedule {
                veterinarian_id,
                day: day.to_lowercase(),
            }
            .into());
        }

        Ok(())
    }

    /// Requires the veterinarian row to be claimed by `user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - The caller is this veterinarian
    /// - `Err(DomainError::NotOwner(resource))` - Unknown row or linked to someone else
    pub async fn validate_veterinarian_link(
        &self,
        user_id: i32,
        veterinarian_id: i32,
        resource: &'static str,
    ) -> Result<(), AppError> {
        let vet = VeterinarianRepository::new(self.db)
            .find_by_id(veterinarian_id)
            .await?;

        match vet {
            Some(vet) if vet.user_id == Some(user_id) => Ok(()),
            _ => Err(DomainError::NotOwner(resource).into()),
        }
    }

    /// Requires the appointment to be assigned to the veterinarian linked to `user_id`.
    pub async fn validate_appointment_assignment(
        &self,
        user_id: i32,
        appointment_id: i32,
    ) -> Result<(), AppError> {
        let Some(appointment) = AppointmentRepository::new(self.db)
            .find_by_id(appointment_id)
            .await?
        else {
            return Err(DomainError::NotOwner("appointments").into());
        };

        self.validate_veterinarian_link(user_id, appointment.veterinarian_id, "appointments")
            .await
    }

    /// Requires the appointment to have no treatment record yet.
    pub async fn validate_treatment_slot(&self, appointment_id: i32) -> Result<(), AppError> {
        if TreatmentRepository::new(self.db)
            .exists_for_appointment(appointment_id)
            .await?
        {
            return Err(DomainError::DuplicateTreatment(appointment_id).into());
        }

        Ok(())
    }
}
