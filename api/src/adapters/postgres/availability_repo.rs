//! PostgreSQL adapter for AvailabilityRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{Availability, AvailabilityId, SpecialistId};
use crate::domain::ports::AvailabilityRepository;
use crate::entity::availabilities;
use crate::error::DomainError;

/// PostgreSQL implementation of AvailabilityRepository
pub struct PostgresAvailabilityRepository {
    db: DatabaseConnection,
}

impl PostgresAvailabilityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AvailabilityRepository for PostgresAvailabilityRepository {
    async fn find_active(
        &self,
        specialist_id: &SpecialistId,
        day_of_week: i16,
    ) -> Result<Option<Availability>, DomainError> {
        let result = availabilities::Entity::find()
            .filter(availabilities::Column::SpecialistId.eq(specialist_id.0))
            .filter(availabilities::Column::DayOfWeek.eq(day_of_week))
            .filter(availabilities::Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_for_specialist(
        &self,
        specialist_id: &SpecialistId,
    ) -> Result<Vec<Availability>, DomainError> {
        let results = availabilities::Entity::find()
            .filter(availabilities::Column::SpecialistId.eq(specialist_id.0))
            .order_by_asc(availabilities::Column::DayOfWeek)
            .order_by_asc(availabilities::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<availabilities::Model> for Availability {
    fn from(model: availabilities::Model) -> Self {
        Availability {
            id: AvailabilityId(model.id),
            specialist_id: SpecialistId(model.specialist_id),
            day_of_week: model.day_of_week,
            start_time: model.start_time,
            end_time: model.end_time,
            is_active: model.is_active,
        }
    }
}
