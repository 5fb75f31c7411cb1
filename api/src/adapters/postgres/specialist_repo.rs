//! PostgreSQL adapter for SpecialistRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{Specialist, SpecialistId, SpecialtyId};
use crate::domain::ports::SpecialistRepository;
use crate::entity::specialists;
use crate::error::DomainError;

/// PostgreSQL implementation of SpecialistRepository
pub struct PostgresSpecialistRepository {
    db: DatabaseConnection,
}

impl PostgresSpecialistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SpecialistRepository for PostgresSpecialistRepository {
    async fn find_by_id(&self, id: &SpecialistId) -> Result<Option<Specialist>, DomainError> {
        let result = specialists::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_in_specialty(
        &self,
        id: &SpecialistId,
        specialty_id: &SpecialtyId,
    ) -> Result<Option<Specialist>, DomainError> {
        let result = specialists::Entity::find_by_id(id.0)
            .filter(specialists::Column::SpecialtyId.eq(specialty_id.0))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list_by_specialty(
        &self,
        specialty_id: &SpecialtyId,
    ) -> Result<Vec<Specialist>, DomainError> {
        let results = specialists::Entity::find()
            .filter(specialists::Column::SpecialtyId.eq(specialty_id.0))
            .filter(specialists::Column::IsActive.eq(true))
            .order_by_asc(specialists::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<specialists::Model> for Specialist {
    fn from(model: specialists::Model) -> Self {
        Specialist {
            id: SpecialistId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            bio: model.bio,
            photo_url: model.photo_url,
            is_active: model.is_active,
            specialty_id: SpecialtyId(model.specialty_id),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}
