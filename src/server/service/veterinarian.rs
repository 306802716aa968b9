//! Veterinarian license management.
//!
//! Admins provision license rows, optionally linked to an existing account and assigned
//! to a clinic. Unlinked rows are later claimed through registration.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        clinic::ClinicRepository, is_unique_violation, is_unique_violation_on,
        user::UserRepository, veterinarian::VeterinarianRepository,
    },
    error::{domain::DomainError, AppError},
    model::veterinarian::{CreateVeterinarianParam, Veterinarian, VeterinarianDetail},
    pool::transaction,
};

pub struct VeterinarianService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VeterinarianService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<VeterinarianDetail>, AppError> {
        let vets = VeterinarianRepository::new(self.db).get_all().await?;

        self.with_users(vets).await
    }

    pub async fn get_by_id(&self, veterinarian_id: i32) -> Result<VeterinarianDetail, AppError> {
        let Some(vet) = VeterinarianRepository::new(self.db)
            .find_by_id(veterinarian_id)
            .await?
        else {
            return Err(veterinarian_not_found());
        };

        let mut details = self.with_users(vec![vet]).await?;

        details.pop().ok_or_else(veterinarian_not_found)
    }

    /// Veterinarians assigned to a clinic.
    ///
    /// # Returns
    /// - `Ok(Vec<VeterinarianDetail>)` - Possibly empty list
    /// - `Err(AppError::NotFound)` - Clinic does not exist
    pub async fn get_by_clinic(&self, clinic_id: i32) -> Result<Vec<VeterinarianDetail>, AppError> {
        if !ClinicRepository::new(self.db).exists(clinic_id).await? {
            return Err(AppError::NotFound("Clinic not found".to_string()));
        }

        let vets = VeterinarianRepository::new(self.db)
            .get_by_clinic(clinic_id)
            .await?;

        self.with_users(vets).await
    }

    /// Provisions a license row.
    ///
    /// # Returns
    /// - `Ok(Veterinarian)` - Created row
    /// - `Err(AppError::BadRequest)` - Empty license number
    /// - `Err(DomainError::LicenseExists)` - License already provisioned
    /// - `Err(DomainError::UserAlreadyLinked)` - User already holds another license
    /// - `Err(AppError::NotFound)` - Named user or clinic missing
    pub async fn create(&self, param: CreateVeterinarianParam) -> Result<Veterinarian, AppError> {
        if param.license_no.is_empty() {
            return Err(AppError::BadRequest("license_no is required".to_string()));
        }

        let txn = self.db.begin().await?;
        let result = provision(&txn, param).await;
        let vet = transaction::finish(txn, result).await?;

        tracing::info!(
            veterinarian_id = vet.veterinarian_id,
            "Provisioned veterinarian license"
        );

        Ok(vet)
    }

    /// Attaches the linked account, if any, to each veterinarian.
    async fn with_users(
        &self,
        vets: Vec<Veterinarian>,
    ) -> Result<Vec<VeterinarianDetail>, AppError> {
        let user_ids: Vec<i32> = vets.iter().filter_map(|v| v.user_id).collect();
        let mut users = UserRepository::new(self.db).get_by_ids(&user_ids).await?;

        Ok(vets
            .into_iter()
            .map(|veterinarian| {
                let user = veterinarian.user_id.and_then(|id| users.remove(&id));
                VeterinarianDetail { veterinarian, user }
            })
            .collect())
    }
}

/// License number and account name shown next to a veterinarian.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct VeterinarianLabel {
    pub license_no: String,
    pub name: Option<String>,
}

/// Labels for the given veterinarian ids. Unknown ids are absent from the map.
pub(crate) async fn veterinarian_labels<C: ConnectionTrait>(
    db: &C,
    veterinarian_ids: &[i32],
) -> Result<HashMap<i32, VeterinarianLabel>, DbErr> {
    let vets = VeterinarianRepository::new(db)
        .get_by_ids(veterinarian_ids)
        .await?;

    let user_ids: Vec<i32> = vets.values().filter_map(|v| v.user_id).collect();
    let users = UserRepository::new(db).get_by_ids(&user_ids).await?;

    Ok(vets
        .into_iter()
        .map(|(id, vet)| {
            let name = vet
                .user_id
                .and_then(|user_id| users.get(&user_id))
                .map(|user| user.full_name());

            (
                id,
                VeterinarianLabel {
                    license_no: vet.license_no,
                    name,
                },
            )
        })
        .collect())
}

fn veterinarian_not_found() -> AppError {
    AppError::NotFound("Veterinarian not found".to_string())
}

/// Maps a failed license insert to the constraint a concurrent request won.
pub(crate) fn provision_conflict(err: DbErr, param: &CreateVeterinarianParam) -> AppError {
    if !is_unique_violation(&err) {
        return AppError::from(err);
    }

    match param.user_id {
        Some(user_id) if is_unique_violation_on(&err, "user_id") => {
            DomainError::UserAlreadyLinked(user_id).into()
        }
        _ => DomainError::LicenseExists(param.license_no.clone()).into(),
    }
}

async fn provision<C: ConnectionTrait>(
    db: &C,
    param: CreateVeterinarianParam,
) -> Result<Veterinarian, AppError> {
    let vet_repo = VeterinarianRepository::new(db);

    if vet_repo.find_by_license(&param.license_no).await?.is_some() {
        return Err(DomainError::LicenseExists(param.license_no).into());
    }

    if let Some(user_id) = param.user_id {
        if UserRepository::new(db).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if vet_repo.find_by_user_id(user_id).await?.is_some() {
            return Err(DomainError::UserAlreadyLinked(user_id).into());
        }
    }

    if let Some(clinic_id) = param.clinic_id {
        if !ClinicRepository::new(db).exists(clinic_id).await? {
            return Err(AppError::NotFound("Clinic not found".to_string()));
        }
    }

    let vet = vet_repo
        .create(&param.license_no, param.user_id)
        .await
        .map_err(|err| provision_conflict(err, &param))?;

    if let Some(clinic_id) = param.clinic_id {
        vet_repo.link_clinic(vet.veterinarian_id, clinic_id).await?;
    }

    Ok(vet)
}
