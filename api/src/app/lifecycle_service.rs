//! Lifecycle service
//!
//! Owns every status transition an appointment can make and the admin
//! queries over the appointment book. Transitions trigger the email and
//! webhook collaborators; their failures are logged and never surface to
//! the caller.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::app::SlotService;
use crate::domain::entities::{
    on_grid, truncate_to_minute, AdminId, Appointment, AppointmentId, AppointmentStatus,
    ConfirmDecision, EditAppointment,
};
use crate::domain::ports::{
    AppointmentRepository, AppointmentSummary, AvailabilityRepository, EmailKind, Mailer,
    SpecialistRepository, SpecialtyRepository, WebhookEvent, WebhookSink,
};
use crate::error::DomainError;

/// Service for managing the appointment state machine
pub struct LifecycleService<SY, SP, AV, AP, MA, WH>
where
    SY: SpecialtyRepository,
    SP: SpecialistRepository,
    AV: AvailabilityRepository,
    AP: AppointmentRepository,
    MA: Mailer,
    WH: WebhookSink,
{
    specialties: Arc<SY>,
    specialists: Arc<SP>,
    slots: Arc<SlotService<SP, AV, AP>>,
    appointments: Arc<AP>,
    mailer: Arc<MA>,
    webhooks: Arc<WH>,
}

impl<SY, SP, AV, AP, MA, WH> LifecycleService<SY, SP, AV, AP, MA, WH>
where
    SY: SpecialtyRepository,
    SP: SpecialistRepository,
    AV: AvailabilityRepository,
    AP: AppointmentRepository,
    MA: Mailer,
    WH: WebhookSink,
{
    pub fn new(
        specialties: Arc<SY>,
        specialists: Arc<SP>,
        slots: Arc<SlotService<SP, AV, AP>>,
        appointments: Arc<AP>,
        mailer: Arc<MA>,
        webhooks: Arc<WH>,
    ) -> Self {
        Self {
            specialties,
            specialists,
            slots,
            appointments,
            mailer,
            webhooks,
        }
    }

    /// Confirm or reject a pending appointment
    ///
    /// Rejection is a transition to cancelled. Either way the appointment
    /// must still be pending.
    pub async fn confirm(
        &self,
        id: &AppointmentId,
        decision: ConfirmDecision,
        acting_admin: &AdminId,
    ) -> Result<Appointment, DomainError> {
        let mut appointment = self.get(id).await?;

        if !appointment.can_decide() {
            return Err(DomainError::Validation(format!(
                "only pending appointments can be confirmed or rejected (current status: {})",
                appointment.status
            )));
        }

        match decision {
            ConfirmDecision::Confirm => {
                appointment.status = AppointmentStatus::Confirmed;
                appointment.confirmed_at = Some(Utc::now());
                appointment.confirmed_by = Some(*acting_admin);
            }
            ConfirmDecision::Reject => {
                appointment.status = AppointmentStatus::Cancelled;
            }
        }
        appointment.updated_at = Utc::now();

        let saved = self.appointments.update(&appointment).await?;

        match decision {
            ConfirmDecision::Confirm => {
                self.enqueue_email(EmailKind::Confirmation, &saved).await;
                self.dispatch(WebhookEvent::Confirmed, &saved).await;
            }
            ConfirmDecision::Reject => {
                self.dispatch(WebhookEvent::Cancelled, &saved).await;
            }
        }

        Ok(saved)
    }

    /// Mark a confirmed appointment as completed
    pub async fn complete(&self, id: &AppointmentId) -> Result<Appointment, DomainError> {
        let mut appointment = self.get(id).await?;

        if !appointment.can_complete() {
            return Err(DomainError::Validation(format!(
                "only confirmed appointments can be completed (current status: {})",
                appointment.status
            )));
        }

        appointment.status = AppointmentStatus::Completed;
        appointment.updated_at = Utc::now();

        let saved = self.appointments.update(&appointment).await?;
        self.dispatch(WebhookEvent::Completed, &saved).await;

        Ok(saved)
    }

    /// Cancel an appointment through its public access token
    ///
    /// The unauthenticated patient path. Cancelling releases the slot
    /// immediately - slot freedom is derived from status, nothing else to
    /// clean up. Cancelling an already-cancelled appointment is a no-op
    /// success.
    pub async fn cancel_by_token(&self, token: &str) -> Result<Appointment, DomainError> {
        let mut appointment = self
            .appointments
            .find_by_token(token)
            .await?
            .ok_or_else(|| DomainError::NotFound("appointment not found".to_string()))?;

        if !appointment.can_cancel() {
            return Err(DomainError::Validation(
                "a completed appointment cannot be cancelled".to_string(),
            ));
        }

        appointment.status = AppointmentStatus::Cancelled;
        appointment.updated_at = Utc::now();

        let saved = self.appointments.update(&appointment).await?;
        self.dispatch(WebhookEvent::Cancelled, &saved).await;

        Ok(saved)
    }

    /// Edit an existing appointment's fields
    ///
    /// Terminal appointments are immutable. Moving the appointment to a
    /// different slot re-runs the same availability check as a fresh
    /// booking; re-submitting the unchanged slot is allowed. A specialty
    /// change re-prices the appointment from the new specialty's base
    /// price. Status is not an editable field.
    pub async fn edit(
        &self,
        id: &AppointmentId,
        changes: EditAppointment,
    ) -> Result<Appointment, DomainError> {
        let mut appointment = self.get(id).await?;

        if !appointment.can_edit() {
            return Err(DomainError::Validation(
                "completed or cancelled appointments cannot be edited".to_string(),
            ));
        }

        let original_specialist = appointment.specialist_id;
        let original_date = appointment.date;
        let original_time = appointment.time;

        if let Some(specialty_id) = changes.specialty_id {
            if specialty_id != appointment.specialty_id {
                let specialty = self
                    .specialties
                    .find_by_id(&specialty_id)
                    .await?
                    .ok_or_else(|| DomainError::NotFound("specialty not found".to_string()))?;
                appointment.specialty_id = specialty_id;
                appointment.price_cents = specialty.base_price_cents;
            }
        }

        if let Some(specialist_id) = changes.specialist_id {
            if specialist_id != appointment.specialist_id {
                self.specialists
                    .find_in_specialty(&specialist_id, &appointment.specialty_id)
                    .await?
                    .ok_or_else(|| {
                        DomainError::NotFound(
                            "specialist not found or does not offer this specialty".to_string(),
                        )
                    })?;
                appointment.specialist_id = specialist_id;
            }
        }

        if changes.touches_slot() {
            let new_date = changes.date.unwrap_or(original_date);
            let new_time = changes.time.map(truncate_to_minute).unwrap_or(original_time);

            if !on_grid(new_time) {
                return Err(DomainError::Validation(
                    "appointment time must be on the hour between 08:00 and 21:00".to_string(),
                ));
            }

            let same_slot = appointment.specialist_id == original_specialist
                && new_date == original_date
                && new_time == original_time;

            if !same_slot {
                let available = self
                    .slots
                    .available_slots(&appointment.specialist_id, new_date)
                    .await?;
                if !available.contains(&new_time) {
                    return Err(DomainError::SlotConflict(
                        "time slot not available".to_string(),
                    ));
                }
            }

            appointment.date = new_date;
            appointment.time = new_time;
        }

        if let Some(name) = changes.patient_name {
            appointment.patient_name = name;
        }
        if let Some(email) = changes.patient_email {
            appointment.patient_email = email;
        }
        if let Some(phone) = changes.patient_phone {
            appointment.patient_phone = phone;
        }
        if let Some(notes) = changes.notes {
            appointment.notes = Some(notes);
        }
        appointment.updated_at = Utc::now();

        let saved = self.appointments.update(&appointment).await?;
        self.enqueue_email(EmailKind::Edited, &saved).await;

        Ok(saved)
    }

    /// All appointments, newest first
    pub async fn find_all(&self) -> Result<Vec<Appointment>, DomainError> {
        self.appointments.find_all().await
    }

    /// Appointments in a given status
    pub async fn find_by_status(
        &self,
        status: AppointmentStatus,
    ) -> Result<Vec<Appointment>, DomainError> {
        self.appointments.find_by_status(status).await
    }

    /// Appointments in a date range (admin calendar)
    pub async fn find_in_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Appointment>, DomainError> {
        self.appointments.find_in_date_range(start, end).await
    }

    /// A single appointment by id
    pub async fn get(&self, id: &AppointmentId) -> Result<Appointment, DomainError> {
        self.appointments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("appointment not found".to_string()))
    }

    /// A single appointment by its public token
    pub async fn get_by_token(&self, token: &str) -> Result<Appointment, DomainError> {
        self.appointments
            .find_by_token(token)
            .await?
            .ok_or_else(|| DomainError::NotFound("appointment not found".to_string()))
    }

    async fn enqueue_email(&self, kind: EmailKind, appointment: &Appointment) {
        if let Err(e) = self.mailer.enqueue(kind, appointment).await {
            tracing::warn!(
                error = %e,
                kind = %kind,
                appointment_id = %appointment.id,
                "failed to enqueue notification email"
            );
        }
    }

    async fn dispatch(&self, event: WebhookEvent, appointment: &Appointment) {
        let summary = AppointmentSummary::from(appointment);
        if let Err(e) = self.webhooks.notify(event, &summary).await {
            tracing::warn!(
                error = %e,
                event = %event,
                appointment_id = %appointment.id,
                "failed to dispatch webhook"
            );
        }
    }
}
