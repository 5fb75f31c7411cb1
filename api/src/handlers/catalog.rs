//! Catalog handlers
//!
//! Read-only listings the booking flow needs. Catalog management lives in
//! a separate admin tool.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{Specialist, Specialty, SpecialtyId};
use crate::domain::ports::{SpecialistRepository, SpecialtyRepository};
use crate::error::AppError;
use crate::AppState;

#[derive(Serialize)]
pub struct SpecialtyResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub base_price_cents: i64,
    pub duration_minutes: i32,
}

impl From<Specialty> for SpecialtyResponse {
    fn from(specialty: Specialty) -> Self {
        Self {
            id: specialty.id.0,
            name: specialty.name,
            description: specialty.description,
            base_price_cents: specialty.base_price_cents,
            duration_minutes: specialty.duration_minutes,
        }
    }
}

#[derive(Serialize)]
pub struct SpecialistResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub specialty_id: Uuid,
}

impl From<Specialist> for SpecialistResponse {
    fn from(specialist: Specialist) -> Self {
        Self {
            id: specialist.id.0,
            first_name: specialist.first_name,
            last_name: specialist.last_name,
            bio: specialist.bio,
            photo_url: specialist.photo_url,
            specialty_id: specialist.specialty_id.0,
        }
    }
}

/// GET /specialties
pub async fn list_specialties(
    State(state): State<AppState>,
) -> Result<Json<Vec<SpecialtyResponse>>, AppError> {
    let specialties = state.specialty_repo.list_active().await?;
    Ok(Json(specialties.into_iter().map(Into::into).collect()))
}

/// GET /specialties/:id/specialists
pub async fn list_specialists(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<SpecialistResponse>>, AppError> {
    let specialty_id = SpecialtyId(id);

    state
        .specialty_repo
        .find_by_id(&specialty_id)
        .await?
        .ok_or_else(|| AppError::NotFound("specialty not found".to_string()))?;

    let specialists = state.specialist_repo.list_by_specialty(&specialty_id).await?;
    Ok(Json(specialists.into_iter().map(Into::into).collect()))
}
