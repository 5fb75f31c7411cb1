//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use crate::domain::entities::{
    Admin, Appointment, AppointmentId, AppointmentStatus, Availability, NewAppointment,
    Specialist, SpecialistId, Specialty, SpecialtyId,
};
use crate::error::DomainError;

/// Repository for Appointment entities
///
/// The booking engine is the only caller of `create`; the lifecycle
/// manager is the only caller of `update`. The slot calculator reads only.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Find an appointment by ID
    async fn find_by_id(&self, id: &AppointmentId) -> Result<Option<Appointment>, DomainError>;

    /// Find an appointment by its unique access token (patient-facing path)
    async fn find_by_token(&self, token: &str) -> Result<Option<Appointment>, DomainError>;

    /// All slot-occupying appointments (pending/confirmed/completed) for a
    /// specialist on one date
    async fn find_active_for_day(
        &self,
        specialist_id: &SpecialistId,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, DomainError>;

    /// The slot-occupying appointment at an exact (specialist, date, time)
    /// key, if any; used for the pre-commit re-check
    async fn find_active_at(
        &self,
        specialist_id: &SpecialistId,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<Appointment>, DomainError>;

    /// Persist a new appointment with status pending
    ///
    /// Implementations must translate a uniqueness violation on the
    /// active-slot key into [`DomainError::SlotConflict`].
    async fn create(&self, appointment: &NewAppointment) -> Result<Appointment, DomainError>;

    /// Persist the current state of an existing appointment
    async fn update(&self, appointment: &Appointment) -> Result<Appointment, DomainError>;

    /// All appointments, newest first (admin listing)
    async fn find_all(&self) -> Result<Vec<Appointment>, DomainError>;

    /// Appointments in a given status, soonest first
    async fn find_by_status(
        &self,
        status: AppointmentStatus,
    ) -> Result<Vec<Appointment>, DomainError>;

    /// Appointments whose date falls in [start, end], soonest first
    /// (admin calendar view)
    async fn find_in_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Appointment>, DomainError>;
}

/// Repository for Availability records (read-only to the core)
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// The active availability for a specialist on a weekday (0 = Sunday),
    /// if any
    async fn find_active(
        &self,
        specialist_id: &SpecialistId,
        day_of_week: i16,
    ) -> Result<Option<Availability>, DomainError>;

    /// All availability records for a specialist, ordered by day then start
    async fn find_for_specialist(
        &self,
        specialist_id: &SpecialistId,
    ) -> Result<Vec<Availability>, DomainError>;
}

/// Repository for Specialist entities (catalog, read-only here)
#[async_trait]
pub trait SpecialistRepository: Send + Sync {
    /// Find a specialist by ID
    async fn find_by_id(&self, id: &SpecialistId) -> Result<Option<Specialist>, DomainError>;

    /// Find a specialist by ID, constrained to a specialty
    async fn find_in_specialty(
        &self,
        id: &SpecialistId,
        specialty_id: &SpecialtyId,
    ) -> Result<Option<Specialist>, DomainError>;

    /// Active specialists offering a specialty, ordered by first name
    async fn list_by_specialty(
        &self,
        specialty_id: &SpecialtyId,
    ) -> Result<Vec<Specialist>, DomainError>;
}

/// Repository for Specialty entities (catalog, read-only here)
#[async_trait]
pub trait SpecialtyRepository: Send + Sync {
    /// Find a specialty by ID
    async fn find_by_id(&self, id: &SpecialtyId) -> Result<Option<Specialty>, DomainError>;

    /// All active specialties, ordered by name
    async fn list_active(&self) -> Result<Vec<Specialty>, DomainError>;
}

/// Lookup for admin identities (authentication collaborator)
#[async_trait]
pub trait AdminDirectory: Send + Sync {
    /// Find an active admin by the hash of their API key
    async fn find_by_api_key_hash(&self, hash: &str) -> Result<Option<Admin>, DomainError>;
}
