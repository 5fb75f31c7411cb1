//! Slot service
//!
//! Computes the bookable slots for a specialist on a given date from the
//! weekly availability pattern and the day's occupying appointments.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::domain::entities::{day_index, slot_grid, truncate_to_minute, SpecialistId};
use crate::domain::ports::{AppointmentRepository, AvailabilityRepository, SpecialistRepository};
use crate::error::DomainError;

/// Read-only service deriving available slots
pub struct SlotService<SP, AV, AP>
where
    SP: SpecialistRepository,
    AV: AvailabilityRepository,
    AP: AppointmentRepository,
{
    specialists: Arc<SP>,
    availabilities: Arc<AV>,
    appointments: Arc<AP>,
}

impl<SP, AV, AP> SlotService<SP, AV, AP>
where
    SP: SpecialistRepository,
    AV: AvailabilityRepository,
    AP: AppointmentRepository,
{
    pub fn new(specialists: Arc<SP>, availabilities: Arc<AV>, appointments: Arc<AP>) -> Self {
        Self {
            specialists,
            availabilities,
            appointments,
        }
    }

    /// Available slots for a specialist on a date, ascending
    ///
    /// A day with no active availability yields an empty list - that is a
    /// valid state, not an error. The availability window's start/end are
    /// intentionally not consulted: only the active flag gates the day,
    /// and the grid is always the full 08:00-21:00 range.
    pub async fn available_slots(
        &self,
        specialist_id: &SpecialistId,
        date: NaiveDate,
    ) -> Result<Vec<NaiveTime>, DomainError> {
        self.specialists
            .find_by_id(specialist_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("specialist not found".to_string()))?;

        let day_of_week = day_index(date.weekday());
        let availability = self
            .availabilities
            .find_active(specialist_id, day_of_week)
            .await?;

        if availability.is_none() {
            return Ok(Vec::new());
        }

        let occupied: Vec<NaiveTime> = self
            .appointments
            .find_active_for_day(specialist_id, date)
            .await?
            .iter()
            .map(|appointment| truncate_to_minute(appointment.time))
            .collect();

        Ok(slot_grid()
            .into_iter()
            .filter(|slot| !occupied.contains(slot))
            .collect())
    }
}
