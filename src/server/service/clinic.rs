use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::clinic::ClinicRepository,
    error::AppError,
    model::clinic::{Clinic, ClinicParam},
    pool::transaction,
};

pub struct ClinicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClinicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Clinic>, AppError> {
        Ok(ClinicRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, clinic_id: i32) -> Result<Clinic, AppError> {
        ClinicRepository::new(self.db)
            .find_by_id(clinic_id)
            .await?
            .ok_or_else(clinic_not_found)
    }

    pub async fn create(&self, param: ClinicParam) -> Result<Clinic, AppError> {
        let txn = self.db.begin().await?;
        let result = ClinicRepository::new(&txn).create(param).await;
        let clinic = transaction::finish(txn, result).await?;

        tracing::info!(clinic_id = clinic.clinic_id, "Created clinic");

        Ok(clinic)
    }

    /// Overwrites every column of an existing clinic.
    pub async fn replace(&self, clinic_id: i32, param: ClinicParam) -> Result<Clinic, AppError> {
        let txn = self.db.begin().await?;
        let result = ClinicRepository::new(&txn).replace(clinic_id, param).await;

        transaction::finish(txn, result)
            .await?
            .ok_or_else(clinic_not_found)
    }
}

fn clinic_not_found() -> AppError {
    AppError::NotFound("Clinic not found".to_string())
}
