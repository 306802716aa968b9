//! Appointment repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::appointment::{
    Appointment, CreateAppointmentParam, UpdateAppointmentParam,
};

/// Restricts an appointment listing.
#[derive(Debug, Clone, Copy)]
pub enum AppointmentFilter<'f> {
    All,
    Veterinarians(&'f [i32]),
    Pets(&'f [i32]),
    Ids(&'f [i32]),
}

pub struct AppointmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AppointmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateAppointmentParam) -> Result<Appointment, DbErr> {
        let entity = entity::appointment::ActiveModel {
            datetime: ActiveValue::Set(param.datetime),
            status: ActiveValue::Set(param.status),
            pet_id: ActiveValue::Set(param.pet_id),
            clinic_id: ActiveValue::Set(param.clinic_id),
            veterinarian_id: ActiveValue::Set(param.veterinarian_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Appointment::from_entity(entity))
    }

    pub async fn find_by_id(&self, appointment_id: i32) -> Result<Option<Appointment>, DbErr> {
        let entity = entity::prelude::Appointment::find_by_id(appointment_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Appointment::from_entity))
    }

    /// Appointments matching the filter, soonest first.
    ///
    /// An empty id slice matches nothing.
    pub async fn get_filtered(
        &self,
        filter: AppointmentFilter<'_>,
    ) -> Result<Vec<Appointment>, DbErr> {
        let mut query = entity::prelude::Appointment::find();

        query = match filter {
            AppointmentFilter::All => query,
            AppointmentFilter::Veterinarians(ids)
            | AppointmentFilter::Pets(ids)
            | AppointmentFilter::Ids(ids)
                if ids.is_empty() =>
            {
                return Ok(Vec::new())
            }
            AppointmentFilter::Veterinarians(ids) => {
                query.filter(entity::appointment::Column::VeterinarianId.is_in(ids.to_vec()))
            }
            AppointmentFilter::Pets(ids) => {
                query.filter(entity::appointment::Column::PetId.is_in(ids.to_vec()))
            }
            AppointmentFilter::Ids(ids) => {
                query.filter(entity::appointment::Column::AppointmentId.is_in(ids.to_vec()))
            }
        };

        let entities = query
            .order_by_asc(entity::appointment::Column::Datetime)
            .order_by_asc(entity::appointment::Column::AppointmentId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Appointment::from_entity).collect())
    }

    /// # Returns
    /// - `Ok(true)` - Status changed
    /// - `Ok(false)` - No appointment with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(&self, appointment_id: i32, status: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Appointment::update_many()
            .col_expr(
                entity::appointment::Column::Status,
                sea_orm::sea_query::Expr::value(status.to_string()),
            )
            .filter(entity::appointment::Column::AppointmentId.eq(appointment_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - Updated appointment
    /// - `Ok(None)` - No appointment with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        appointment_id: i32,
        param: UpdateAppointmentParam,
    ) -> Result<Option<Appointment>, DbErr> {
        let Some(entity) = entity::prelude::Appointment::find_by_id(appointment_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(datetime) = param.datetime {
            active.datetime = ActiveValue::Set(datetime);
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(pet_id) = param.pet_id {
            active.pet_id = ActiveValue::Set(pet_id);
        }
        if let Some(clinic_id) = param.clinic_id {
            active.clinic_id = ActiveValue::Set(clinic_id);
        }
        if let Some(veterinarian_id) = param.veterinarian_id {
            active.veterinarian_id = ActiveValue::Set(veterinarian_id);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Appointment::from_entity(updated)))
    }
}
