//! Treatment records. At most one per appointment.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{auth::Role, treatment::CreateTreatmentDto},
    server::{
        data::{
            appointment::{AppointmentFilter, AppointmentRepository},
            is_unique_violation,
            pet::PetRepository,
            treatment::TreatmentRepository,
            veterinarian::VeterinarianRepository,
        },
        error::{domain::DomainError, AppError},
        model::{
            auth::Identity,
            treatment::{CreateTreatmentParam, Treatment, TreatmentDetail, UpdateTreatmentParam},
        },
        pool::transaction,
        service::{validator::DomainValidator, veterinarian::veterinarian_labels},
    },
};

pub struct TreatmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TreatmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every record for admins, records of their own appointments for veterinarians.
    pub async fn get_visible(&self, caller: &Identity) -> Result<Vec<TreatmentDetail>, AppError> {
        let repo = TreatmentRepository::new(self.db);

        let treatments = if caller.is_admin() {
            repo.get_all().await?
        } else {
            let vet_ids = VeterinarianRepository::new(self.db)
                .ids_for_user(caller.user_id)
                .await?;
            let appointment_ids: Vec<i32> = AppointmentRepository::new(self.db)
                .get_filtered(AppointmentFilter::Veterinarians(&vet_ids))
                .await?
                .into_iter()
                .map(|a| a.appointment_id)
                .collect();
            repo.get_by_appointments(&appointment_ids).await?
        };

        with_details(self.db, treatments).await
    }

    /// One record, if it exists and the caller may see it.
    pub async fn get_visible_by_id(
        &self,
        caller: &Identity,
        record_id: i32,
    ) -> Result<Option<TreatmentDetail>, AppError> {
        let Some(treatment) = TreatmentRepository::new(self.db)
            .find_by_id(record_id)
            .await?
        else {
            return Ok(None);
        };

        if !caller.is_admin() && !is_assigned(self.db, caller.user_id, treatment.appointment_id).await? {
            return Ok(None);
        }

        Ok(with_details(self.db, vec![treatment]).await?.pop())
    }

    /// Records the outcome of an appointment.
    ///
    /// # Returns
    /// - `Ok(Treatment)` - Created record
    /// - `Err(AppError::BadRequest)` - `appointment_id` missing
    /// - `Err(AppError::NotFound)` - Appointment missing or assigned to another veterinarian
    /// - `Err(DomainError::DuplicateTreatment)` - The appointment already has a record
    pub async fn create(
        &self,
        caller: &Identity,
        dto: CreateTreatmentDto,
    ) -> Result<Treatment, AppError> {
        let Some(appointment_id) = dto.appointment_id else {
            return Err(AppError::BadRequest(
                "appointment_id is required".to_string(),
            ));
        };

        let param = CreateTreatmentParam {
            appointment_id,
            date: dto.date,
            diagnosis: dto.diagnosis,
            note: dto.note,
        };

        let txn = self.db.begin().await?;
        let result = record_treatment(&txn, caller, param).await;

        transaction::finish(txn, result).await
    }

    /// Replaces diagnosis and note.
    ///
    /// Veterinarians may only edit records of appointments assigned to them.
    pub async fn update(
        &self,
        caller: &Identity,
        record_id: i32,
        param: UpdateTreatmentParam,
    ) -> Result<Treatment, AppError> {
        let txn = self.db.begin().await?;
        let result = amend_treatment(&txn, caller, record_id, param).await;

        transaction::finish(txn, result).await
    }
}

fn treatment_not_found() -> AppError {
    AppError::NotFound("Treatment record not found".to_string())
}

/// Whether the appointment is assigned to a veterinarian row claimed by the user.
async fn is_assigned<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    appointment_id: i32,
) -> Result<bool, AppError> {
    let Some(appointment) = AppointmentRepository::new(db)
        .find_by_id(appointment_id)
        .await?
    else {
        return Ok(false);
    };

    let vet_ids = VeterinarianRepository::new(db).ids_for_user(user_id).await?;

    Ok(vet_ids.contains(&appointment.veterinarian_id))
}

async fn record_treatment<C: ConnectionTrait>(
    db: &C,
    caller: &Identity,
    param: CreateTreatmentParam,
) -> Result<Treatment, AppError> {
    let appointment_id = param.appointment_id;

    let reachable = match caller.role {
        Role::Veterinarian => is_assigned(db, caller.user_id, appointment_id).await?,
        _ => AppointmentRepository::new(db)
            .find_by_id(appointment_id)
            .await?
            .is_some(),
    };
    if !reachable {
        return Err(AppError::NotFound(
            "Appointment not found or not authorized".to_string(),
        ));
    }

    DomainValidator::new(db)
        .validate_treatment_slot(appointment_id)
        .await?;

    TreatmentRepository::new(db).create(param).await.map_err(|err| {
        if is_unique_violation(&err) {
            AppError::from(DomainError::DuplicateTreatment(appointment_id))
        } else {
            AppError::from(err)
        }
    })
}

async fn amend_treatment<C: ConnectionTrait>(
    db: &C,
    caller: &Identity,
    record_id: i32,
    param: UpdateTreatmentParam,
) -> Result<Treatment, AppError> {
    let repo = TreatmentRepository::new(db);

    let Some(treatment) = repo.find_by_id(record_id).await? else {
        return Err(treatment_not_found());
    };

    if caller.role == Role::Veterinarian
        && !is_assigned(db, caller.user_id, treatment.appointment_id).await?
    {
        return Err(DomainError::NotOwner("treatment records").into());
    }

    repo.update(record_id, param)
        .await?
        .ok_or_else(treatment_not_found)
}

/// Attaches pet name and veterinarian label through each record's appointment.
async fn with_details<C: ConnectionTrait>(
    db: &C,
    treatments: Vec<Treatment>,
) -> Result<Vec<TreatmentDetail>, AppError> {
    let appointment_ids: Vec<i32> = treatments.iter().map(|t| t.appointment_id).collect();
    let appointments: HashMap<i32, (i32, i32)> = AppointmentRepository::new(db)
        .get_filtered(AppointmentFilter::Ids(&appointment_ids))
        .await?
        .into_iter()
        .map(|a| (a.appointment_id, (a.pet_id, a.veterinarian_id)))
        .collect();

    let pet_ids: Vec<i32> = appointments.values().map(|(pet_id, _)| *pet_id).collect();
    let vet_ids: Vec<i32> = appointments.values().map(|(_, vet_id)| *vet_id).collect();

    let pets: HashMap<i32, String> = PetRepository::new(db)
        .get_by_ids(&pet_ids)
        .await?
        .into_iter()
        .map(|p| (p.pet_id, p.name))
        .collect();
    let vets = veterinarian_labels(db, &vet_ids).await?;

    Ok(treatments
        .into_iter()
        .map(|treatment| {
            let appointment = appointments.get(&treatment.appointment_id);
            let vet = appointment.and_then(|(_, vet_id)| vets.get(vet_id));

            TreatmentDetail {
                pet_name: appointment.and_then(|(pet_id, _)| pets.get(pet_id).cloned()),
                vet_name: vet.and_then(|v| v.name.clone()),
                license_no: vet.map(|v| v.license_no.clone()),
                treatment,
            }
        })
        .collect())
}
