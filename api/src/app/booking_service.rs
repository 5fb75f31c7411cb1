//! Booking service
//!
//! Validates and commits new appointments. Conflict prevention is
//! two-phase: the slot list check gives a friendly early rejection, the
//! pre-commit re-check narrows the race window, and the store's partial
//! unique index over active statuses is the actual source of truth (the
//! adapter translates its violation into the same conflict error).

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use rand::Rng;

use crate::app::SlotService;
use crate::domain::entities::{
    on_grid, Appointment, NewAppointment, SpecialistId, SpecialtyId, FIRST_SLOT_HOUR,
    LAST_SLOT_HOUR,
};
use crate::domain::ports::{
    AppointmentRepository, AppointmentSummary, AvailabilityRepository, SpecialistRepository,
    SpecialtyRepository, WebhookEvent, WebhookSink,
};
use crate::error::DomainError;

/// A validated booking request
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub specialty_id: SpecialtyId,
    pub specialist_id: SpecialistId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub notes: Option<String>,
}

/// Service for creating appointments
pub struct BookingService<SY, SP, AV, AP, WH>
where
    SY: SpecialtyRepository,
    SP: SpecialistRepository,
    AV: AvailabilityRepository,
    AP: AppointmentRepository,
    WH: WebhookSink,
{
    specialties: Arc<SY>,
    specialists: Arc<SP>,
    slots: Arc<SlotService<SP, AV, AP>>,
    appointments: Arc<AP>,
    webhooks: Arc<WH>,
}

impl<SY, SP, AV, AP, WH> BookingService<SY, SP, AV, AP, WH>
where
    SY: SpecialtyRepository,
    SP: SpecialistRepository,
    AV: AvailabilityRepository,
    AP: AppointmentRepository,
    WH: WebhookSink,
{
    pub fn new(
        specialties: Arc<SY>,
        specialists: Arc<SP>,
        slots: Arc<SlotService<SP, AV, AP>>,
        appointments: Arc<AP>,
        webhooks: Arc<WH>,
    ) -> Self {
        Self {
            specialties,
            specialists,
            slots,
            appointments,
            webhooks,
        }
    }

    /// Book a new appointment
    ///
    /// Failure order: unknown specialty/specialist (not found), off-grid
    /// time (validation), occupied slot (conflict), then the pre-commit
    /// re-check (conflict with a different message). On success the
    /// appointment is persisted as pending with the specialty's current
    /// base price and a fresh access token.
    pub async fn book(&self, booking: NewBooking) -> Result<Appointment, DomainError> {
        let specialty = self
            .specialties
            .find_by_id(&booking.specialty_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("specialty not found".to_string()))?;

        self.specialists
            .find_in_specialty(&booking.specialist_id, &booking.specialty_id)
            .await?
            .ok_or_else(|| {
                DomainError::NotFound(
                    "specialist not found or does not offer this specialty".to_string(),
                )
            })?;

        if !on_grid(booking.time) {
            return Err(DomainError::Validation(format!(
                "appointment time must be on the hour between {:02}:00 and {:02}:00",
                FIRST_SLOT_HOUR, LAST_SLOT_HOUR
            )));
        }

        let available = self
            .slots
            .available_slots(&booking.specialist_id, booking.date)
            .await?;
        if !available.contains(&booking.time) {
            return Err(DomainError::SlotConflict(
                "time slot not available".to_string(),
            ));
        }

        // Re-check against the store right before the write. Another
        // request may have taken the slot since the list above was built.
        if self
            .appointments
            .find_active_at(&booking.specialist_id, booking.date, booking.time)
            .await?
            .is_some()
        {
            return Err(DomainError::SlotConflict(
                "this time slot was just booked, please pick another".to_string(),
            ));
        }

        let new_appointment = NewAppointment {
            specialty_id: booking.specialty_id,
            specialist_id: booking.specialist_id,
            date: booking.date,
            time: booking.time,
            price_cents: specialty.base_price_cents,
            patient_name: booking.patient_name,
            patient_email: booking.patient_email,
            patient_phone: booking.patient_phone,
            unique_token: generate_access_token(),
            notes: booking.notes,
        };

        let appointment = self.appointments.create(&new_appointment).await?;

        let summary = AppointmentSummary::from(&appointment);
        if let Err(e) = self.webhooks.notify(WebhookEvent::Created, &summary).await {
            tracing::warn!(
                error = %e,
                appointment_id = %appointment.id,
                "failed to dispatch created webhook"
            );
        }

        Ok(appointment)
    }
}

const TOKEN_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const TOKEN_LENGTH: usize = 12;

/// Generate the patient-facing access token
///
/// Short but unguessable: 12 characters over a 62-symbol alphabet from the
/// thread-local CSPRNG, so it cannot be enumerated from appointment ids.
pub fn generate_access_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..TOKEN_ALPHABET.len());
            TOKEN_ALPHABET[idx] as char
        })
        .collect()
}
