//! Appointment handlers
//!
//! Public endpoints for the booking flow (slots, book, token-based view and
//! cancel) and the admin endpoints behind the API-key middleware.
//!
//! Boundary rule: dates arrive as `YYYY-MM-DD` strings and are parsed as
//! plain calendar dates, never through a timezone; times arrive as `HH:MM`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app::NewBooking;
use crate::domain::entities::{
    Admin, Appointment, AppointmentId, AppointmentStatus, ConfirmDecision, EditAppointment,
    SpecialistId, SpecialtyId,
};
use crate::error::AppError;
use crate::AppState;

/// Parse a `YYYY-MM-DD` boundary date
fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("invalid date '{}', expected YYYY-MM-DD", value)))
}

/// Parse an `HH:MM` boundary time
fn parse_time(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| AppError::BadRequest(format!("invalid time '{}', expected HH:MM", value)))
}

/// Appointment representation returned to clients
#[derive(Serialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub specialty_id: Uuid,
    pub specialist_id: Uuid,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: AppointmentStatus,
    pub price_cents: i64,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub unique_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<String>,
}

impl From<Appointment> for AppointmentResponse {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id.0,
            specialty_id: appointment.specialty_id.0,
            specialist_id: appointment.specialist_id.0,
            appointment_date: appointment.date.format("%Y-%m-%d").to_string(),
            appointment_time: appointment.time.format("%H:%M").to_string(),
            status: appointment.status,
            price_cents: appointment.price_cents,
            patient_name: appointment.patient_name,
            patient_email: appointment.patient_email,
            patient_phone: appointment.patient_phone,
            unique_token: appointment.unique_token,
            notes: appointment.notes,
            confirmed_at: appointment.confirmed_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

// ---------------------------------------------------------------------------
// Public endpoints
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub specialist_id: Uuid,
    pub date: String,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub slots: Vec<String>,
}

/// GET /appointments/public/available-slots
pub async fn get_available_slots(
    State(state): State<AppState>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let date = parse_date(&query.date)?;

    let slots = state
        .slot_service
        .available_slots(&SpecialistId(query.specialist_id), date)
        .await?;

    Ok(Json(SlotsResponse {
        slots: slots
            .into_iter()
            .map(|t| t.format("%H:%M").to_string())
            .collect(),
    }))
}

#[derive(Deserialize)]
pub struct BookRequest {
    pub specialty_id: Uuid,
    pub specialist_id: Uuid,
    pub appointment_date: String,
    pub appointment_time: String,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub notes: Option<String>,
}

impl BookRequest {
    /// Explicit input validation, run before the engine is invoked
    fn validate(self) -> Result<NewBooking, AppError> {
        let date = parse_date(&self.appointment_date)?;
        let time = parse_time(&self.appointment_time)?;

        let patient_name = self.patient_name.trim().to_string();
        if patient_name.is_empty() {
            return Err(AppError::BadRequest("patient name is required".to_string()));
        }

        let patient_email = self.patient_email.trim().to_string();
        if !patient_email.contains('@') {
            return Err(AppError::BadRequest(format!(
                "'{}' is not a valid email address",
                patient_email
            )));
        }

        let patient_phone = self.patient_phone.trim().to_string();
        if patient_phone.is_empty() {
            return Err(AppError::BadRequest(
                "patient phone is required".to_string(),
            ));
        }

        Ok(NewBooking {
            specialty_id: SpecialtyId(self.specialty_id),
            specialist_id: SpecialistId(self.specialist_id),
            date,
            time,
            patient_name,
            patient_email,
            patient_phone,
            notes: self.notes,
        })
    }
}

/// POST /appointments/public/book
pub async fn book_appointment(
    State(state): State<AppState>,
    Json(request): Json<BookRequest>,
) -> Result<(StatusCode, Json<AppointmentResponse>), AppError> {
    let booking = request.validate()?;

    let appointment = state.booking_service.book(booking).await?;

    Ok((StatusCode::CREATED, Json(appointment.into())))
}

/// GET /appointments/public/token/:token
pub async fn get_by_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let appointment = state.lifecycle_service.get_by_token(&token).await?;
    Ok(Json(appointment.into()))
}

/// PATCH /appointments/public/token/:token/cancel
pub async fn cancel_by_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let appointment = state.lifecycle_service.cancel_by_token(&token).await?;
    Ok(Json(appointment.into()))
}

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

/// GET /appointments
pub async fn list_appointments(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let appointments = match query.status {
        Some(raw) => {
            let status: AppointmentStatus = raw
                .parse()
                .map_err(|e: String| AppError::BadRequest(e))?;
            state.lifecycle_service.find_by_status(status).await?
        }
        None => state.lifecycle_service.find_all().await?,
    };

    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

#[derive(Deserialize)]
pub struct CalendarQuery {
    pub start_date: String,
    pub end_date: String,
}

/// GET /appointments/calendar
pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let start = parse_date(&query.start_date)?;
    let end = parse_date(&query.end_date)?;

    let appointments = state
        .lifecycle_service
        .find_in_date_range(start, end)
        .await?;

    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

/// GET /appointments/:id
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let appointment = state.lifecycle_service.get(&AppointmentId(id)).await?;
    Ok(Json(appointment.into()))
}

#[derive(Deserialize)]
pub struct ConfirmRequest {
    pub decision: ConfirmDecision,
}

/// PATCH /appointments/:id/confirm
pub async fn confirm_appointment(
    State(state): State<AppState>,
    Extension(admin): Extension<Admin>,
    Path(id): Path<Uuid>,
    Json(request): Json<ConfirmRequest>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let appointment = state
        .lifecycle_service
        .confirm(&AppointmentId(id), request.decision, &admin.id)
        .await?;

    Ok(Json(appointment.into()))
}

/// PATCH /appointments/:id/complete
pub async fn complete_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let appointment = state.lifecycle_service.complete(&AppointmentId(id)).await?;
    Ok(Json(appointment.into()))
}

#[derive(Deserialize)]
pub struct EditRequest {
    pub specialty_id: Option<Uuid>,
    pub specialist_id: Option<Uuid>,
    pub appointment_date: Option<String>,
    pub appointment_time: Option<String>,
    pub patient_name: Option<String>,
    pub patient_email: Option<String>,
    pub patient_phone: Option<String>,
    pub notes: Option<String>,
}

impl EditRequest {
    fn validate(self) -> Result<EditAppointment, AppError> {
        let date = self.appointment_date.as_deref().map(parse_date).transpose()?;
        let time = self.appointment_time.as_deref().map(parse_time).transpose()?;

        if let Some(email) = &self.patient_email {
            if !email.contains('@') {
                return Err(AppError::BadRequest(format!(
                    "'{}' is not a valid email address",
                    email
                )));
            }
        }

        Ok(EditAppointment {
            specialty_id: self.specialty_id.map(SpecialtyId),
            specialist_id: self.specialist_id.map(SpecialistId),
            date,
            time,
            patient_name: self.patient_name,
            patient_email: self.patient_email,
            patient_phone: self.patient_phone,
            notes: self.notes,
        })
    }
}

/// PATCH /appointments/:id
pub async fn edit_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<EditRequest>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let changes = request.validate()?;

    let appointment = state
        .lifecycle_service
        .edit(&AppointmentId(id), changes)
        .await?;

    Ok(Json(appointment.into()))
}
