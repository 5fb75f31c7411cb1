//! PostgreSQL adapter for AppointmentRepository

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use uuid::Uuid;

use crate::domain::entities::{
    truncate_to_minute, AdminId, Appointment, AppointmentId, AppointmentStatus, NewAppointment,
    SpecialistId, SpecialtyId,
};
use crate::domain::ports::AppointmentRepository;
use crate::entity::appointments;
use crate::error::DomainError;

/// Status values that occupy a slot, as stored
fn active_statuses() -> Vec<String> {
    AppointmentStatus::ACTIVE
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// PostgreSQL implementation of AppointmentRepository
pub struct PostgresAppointmentRepository {
    db: DatabaseConnection,
}

impl PostgresAppointmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AppointmentRepository for PostgresAppointmentRepository {
    async fn find_by_id(&self, id: &AppointmentId) -> Result<Option<Appointment>, DomainError> {
        let result = appointments::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Appointment>, DomainError> {
        let result = appointments::Entity::find()
            .filter(appointments::Column::UniqueToken.eq(token))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_active_for_day(
        &self,
        specialist_id: &SpecialistId,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, DomainError> {
        let results = appointments::Entity::find()
            .filter(appointments::Column::SpecialistId.eq(specialist_id.0))
            .filter(appointments::Column::AppointmentDate.eq(date))
            .filter(appointments::Column::Status.is_in(active_statuses()))
            .order_by_asc(appointments::Column::AppointmentTime)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_active_at(
        &self,
        specialist_id: &SpecialistId,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<Appointment>, DomainError> {
        let result = appointments::Entity::find()
            .filter(appointments::Column::SpecialistId.eq(specialist_id.0))
            .filter(appointments::Column::AppointmentDate.eq(date))
            .filter(appointments::Column::AppointmentTime.eq(time))
            .filter(appointments::Column::Status.is_in(active_statuses()))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, appointment: &NewAppointment) -> Result<Appointment, DomainError> {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();

        let model = appointments::ActiveModel {
            id: Set(id),
            specialty_id: Set(appointment.specialty_id.0),
            specialist_id: Set(appointment.specialist_id.0),
            appointment_date: Set(appointment.date),
            appointment_time: Set(appointment.time),
            status: Set(AppointmentStatus::Pending.to_string()),
            price_cents: Set(appointment.price_cents),
            patient_name: Set(appointment.patient_name.clone()),
            patient_email: Set(appointment.patient_email.clone()),
            patient_phone: Set(appointment.patient_phone.clone()),
            unique_token: Set(appointment.unique_token.clone()),
            notes: Set(appointment.notes.clone()),
            confirmed_at: Set(None),
            confirmed_by: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // The partial unique index over active statuses is the real
        // double-booking guard; surface its violation as the same
        // conflict the pre-checks produce.
        let result = model.insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                DomainError::SlotConflict(
                    "this time slot was just booked, please pick another".to_string(),
                )
            } else {
                DomainError::Database(e.to_string())
            }
        })?;

        Ok(result.into())
    }

    async fn update(&self, appointment: &Appointment) -> Result<Appointment, DomainError> {
        let model = appointments::ActiveModel {
            id: Set(appointment.id.0),
            specialty_id: Set(appointment.specialty_id.0),
            specialist_id: Set(appointment.specialist_id.0),
            appointment_date: Set(appointment.date),
            appointment_time: Set(appointment.time),
            status: Set(appointment.status.to_string()),
            price_cents: Set(appointment.price_cents),
            patient_name: Set(appointment.patient_name.clone()),
            patient_email: Set(appointment.patient_email.clone()),
            patient_phone: Set(appointment.patient_phone.clone()),
            notes: Set(appointment.notes.clone()),
            confirmed_at: Set(appointment.confirmed_at.map(|dt| dt.fixed_offset())),
            confirmed_by: Set(appointment.confirmed_by.map(|a| a.0)),
            updated_at: Set(appointment.updated_at.fixed_offset()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn find_all(&self) -> Result<Vec<Appointment>, DomainError> {
        let results = appointments::Entity::find()
            .order_by_desc(appointments::Column::AppointmentDate)
            .order_by_desc(appointments::Column::AppointmentTime)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_status(
        &self,
        status: AppointmentStatus,
    ) -> Result<Vec<Appointment>, DomainError> {
        let results = appointments::Entity::find()
            .filter(appointments::Column::Status.eq(status.to_string()))
            .order_by_asc(appointments::Column::AppointmentDate)
            .order_by_asc(appointments::Column::AppointmentTime)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_in_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Appointment>, DomainError> {
        let results = appointments::Entity::find()
            .filter(appointments::Column::AppointmentDate.between(start, end))
            .order_by_asc(appointments::Column::AppointmentDate)
            .order_by_asc(appointments::Column::AppointmentTime)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<appointments::Model> for Appointment {
    fn from(model: appointments::Model) -> Self {
        Appointment {
            id: AppointmentId(model.id),
            specialty_id: SpecialtyId(model.specialty_id),
            specialist_id: SpecialistId(model.specialist_id),
            date: model.appointment_date,
            // The time column may carry seconds; slots compare at minute
            // precision
            time: truncate_to_minute(model.appointment_time),
            status: model.status.parse().unwrap_or(AppointmentStatus::Pending),
            price_cents: model.price_cents,
            patient_name: model.patient_name,
            patient_email: model.patient_email,
            patient_phone: model.patient_phone,
            unique_token: model.unique_token,
            notes: model.notes,
            confirmed_at: model.confirmed_at.map(|dt| dt.with_timezone(&Utc)),
            confirmed_by: model.confirmed_by.map(AdminId),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
