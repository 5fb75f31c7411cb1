//! PostgreSQL adapter for SpecialtyRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{Specialty, SpecialtyId};
use crate::domain::ports::SpecialtyRepository;
use crate::entity::specialties;
use crate::error::DomainError;

/// PostgreSQL implementation of SpecialtyRepository
pub struct PostgresSpecialtyRepository {
    db: DatabaseConnection,
}

impl PostgresSpecialtyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SpecialtyRepository for PostgresSpecialtyRepository {
    async fn find_by_id(&self, id: &SpecialtyId) -> Result<Option<Specialty>, DomainError> {
        let result = specialties::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list_active(&self) -> Result<Vec<Specialty>, DomainError> {
        let results = specialties::Entity::find()
            .filter(specialties::Column::IsActive.eq(true))
            .order_by_asc(specialties::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<specialties::Model> for Specialty {
    fn from(model: specialties::Model) -> Self {
        Specialty {
            id: SpecialtyId(model.id),
            name: model.name,
            description: model.description,
            base_price_cents: model.base_price_cents,
            duration_minutes: model.duration_minutes,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
