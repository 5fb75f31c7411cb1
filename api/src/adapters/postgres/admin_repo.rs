//! PostgreSQL adapter for AdminDirectory

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::domain::entities::{Admin, AdminId};
use crate::domain::ports::AdminDirectory;
use crate::entity::admins;
use crate::error::DomainError;

/// PostgreSQL implementation of AdminDirectory
pub struct PostgresAdminDirectory {
    db: DatabaseConnection,
}

impl PostgresAdminDirectory {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminDirectory for PostgresAdminDirectory {
    async fn find_by_api_key_hash(&self, hash: &str) -> Result<Option<Admin>, DomainError> {
        let result = admins::Entity::find()
            .filter(admins::Column::ApiKeyHash.eq(hash))
            .filter(admins::Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<admins::Model> for Admin {
    fn from(model: admins::Model) -> Self {
        Admin {
            id: AdminId(model.id),
            name: model.name,
            email: model.email,
            api_key_hash: model.api_key_hash,
            is_active: model.is_active,
        }
    }
}
