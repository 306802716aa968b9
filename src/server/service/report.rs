//! Admin reports over appointments and treatment records.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        appointment::{AppointmentFilter, AppointmentRepository},
        pet::PetRepository,
        report::ReportRepository,
        treatment::TreatmentRepository,
    },
    error::AppError,
    model::report::{ClinicCount, StatusCount, TreatmentReportRow},
    service::veterinarian::veterinarian_labels,
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Number of appointments per status.
    pub async fn appointment_status_counts(&self) -> Result<Vec<StatusCount>, AppError> {
        Ok(ReportRepository::new(self.db)
            .appointment_status_counts()
            .await?)
    }

    /// Number of appointments per clinic, by clinic name.
    pub async fn appointment_clinic_counts(&self) -> Result<Vec<ClinicCount>, AppError> {
        Ok(ReportRepository::new(self.db)
            .appointment_clinic_counts()
            .await?)
    }

    /// One row per treatment record with the pet and treating veterinarian.
    ///
    /// Records whose appointment has disappeared are skipped.
    pub async fn treatment_report(&self) -> Result<Vec<TreatmentReportRow>, AppError> {
        let treatments = TreatmentRepository::new(self.db).get_all().await?;

        let appointment_ids: Vec<i32> = treatments.iter().map(|t| t.appointment_id).collect();
        let appointments: HashMap<i32, (i32, i32)> = AppointmentRepository::new(self.db)
            .get_filtered(AppointmentFilter::Ids(&appointment_ids))
            .await?
            .into_iter()
            .map(|a| (a.appointment_id, (a.pet_id, a.veterinarian_id)))
            .collect();

        let pet_ids: Vec<i32> = appointments.values().map(|(pet_id, _)| *pet_id).collect();
        let vet_ids: Vec<i32> = appointments.values().map(|(_, vet_id)| *vet_id).collect();

        let pets: HashMap<i32, String> = PetRepository::new(self.db)
            .get_by_ids(&pet_ids)
            .await?
            .into_iter()
            .map(|p| (p.pet_id, p.name))
            .collect();
        let vets = veterinarian_labels(self.db, &vet_ids).await?;

        Ok(treatments
            .into_iter()
            .filter_map(|treatment| {
                let (pet_id, vet_id) = appointments.get(&treatment.appointment_id)?;
                let vet = vets.get(vet_id);

                Some(TreatmentReportRow {
                    appointment_id: treatment.appointment_id,
                    pet_name: pets.get(pet_id).cloned().unwrap_or_default(),
                    diagnosis: treatment.diagnosis,
                    vet_name: vet.and_then(|v| v.name.clone()),
                    license_no: vet.map(|v| v.license_no.clone()),
                })
            })
            .collect())
    }
}
