//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing. The
//! appointment store checks the active-slot key inside a single write
//! lock, modeling the partial unique index the real database enforces.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    truncate_to_minute, Admin, Appointment, AppointmentId, AppointmentStatus, Availability,
    NewAppointment, Specialist, SpecialistId, Specialty, SpecialtyId,
};
use crate::domain::ports::{
    AdminDirectory, AppointmentRepository, AppointmentSummary, AvailabilityRepository, EmailKind,
    Mailer, SpecialistRepository, SpecialtyRepository, WebhookEvent, WebhookSink,
};
use crate::error::{DomainError, MailError, WebhookError};

// ============================================================================
// In-Memory Appointment Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAppointmentRepository {
    appointments: Arc<RwLock<HashMap<AppointmentId, Appointment>>>,
}

impl InMemoryAppointmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an appointment for testing
    pub fn with_appointment(self, appointment: Appointment) -> Self {
        self.insert(appointment);
        self
    }

    /// Insert an appointment directly, bypassing the conflict check
    pub fn insert(&self, appointment: Appointment) {
        let mut appointments = self.appointments.write().unwrap();
        appointments.insert(appointment.id, appointment);
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn find_by_id(&self, id: &AppointmentId) -> Result<Option<Appointment>, DomainError> {
        let appointments = self.appointments.read().unwrap();
        Ok(appointments.get(id).cloned())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Appointment>, DomainError> {
        let appointments = self.appointments.read().unwrap();
        Ok(appointments
            .values()
            .find(|a| a.unique_token == token)
            .cloned())
    }

    async fn find_active_for_day(
        &self,
        specialist_id: &SpecialistId,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, DomainError> {
        let appointments = self.appointments.read().unwrap();
        let mut result: Vec<Appointment> = appointments
            .values()
            .filter(|a| a.specialist_id == *specialist_id && a.date == date && a.occupies_slot())
            .cloned()
            .collect();
        result.sort_by_key(|a| a.time);
        Ok(result)
    }

    async fn find_active_at(
        &self,
        specialist_id: &SpecialistId,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<Appointment>, DomainError> {
        let appointments = self.appointments.read().unwrap();
        Ok(appointments
            .values()
            .find(|a| {
                a.specialist_id == *specialist_id
                    && a.date == date
                    && truncate_to_minute(a.time) == time
                    && a.occupies_slot()
            })
            .cloned())
    }

    async fn create(&self, new: &NewAppointment) -> Result<Appointment, DomainError> {
        // Check-and-insert under one lock, like the partial unique index
        let mut appointments = self.appointments.write().unwrap();

        let taken = appointments.values().any(|a| {
            a.specialist_id == new.specialist_id
                && a.date == new.date
                && truncate_to_minute(a.time) == new.time
                && a.occupies_slot()
        });
        if taken {
            return Err(DomainError::SlotConflict(
                "this time slot was just booked, please pick another".to_string(),
            ));
        }

        let now = Utc::now();
        let appointment = Appointment {
            id: AppointmentId::new(),
            specialty_id: new.specialty_id,
            specialist_id: new.specialist_id,
            date: new.date,
            time: new.time,
            status: AppointmentStatus::Pending,
            price_cents: new.price_cents,
            patient_name: new.patient_name.clone(),
            patient_email: new.patient_email.clone(),
            patient_phone: new.patient_phone.clone(),
            unique_token: new.unique_token.clone(),
            notes: new.notes.clone(),
            confirmed_at: None,
            confirmed_by: None,
            created_at: now,
            updated_at: now,
        };

        appointments.insert(appointment.id, appointment.clone());
        Ok(appointment)
    }

    async fn update(&self, appointment: &Appointment) -> Result<Appointment, DomainError> {
        let mut appointments = self.appointments.write().unwrap();
        if !appointments.contains_key(&appointment.id) {
            return Err(DomainError::NotFound(format!(
                "Appointment {} not found",
                appointment.id
            )));
        }
        appointments.insert(appointment.id, appointment.clone());
        Ok(appointment.clone())
    }

    async fn find_all(&self) -> Result<Vec<Appointment>, DomainError> {
        let appointments = self.appointments.read().unwrap();
        let mut result: Vec<Appointment> = appointments.values().cloned().collect();
        result.sort_by(|a, b| (b.date, b.time).cmp(&(a.date, a.time)));
        Ok(result)
    }

    async fn find_by_status(
        &self,
        status: AppointmentStatus,
    ) -> Result<Vec<Appointment>, DomainError> {
        let appointments = self.appointments.read().unwrap();
        let mut result: Vec<Appointment> = appointments
            .values()
            .filter(|a| a.status == status)
            .cloned()
            .collect();
        result.sort_by_key(|a| (a.date, a.time));
        Ok(result)
    }

    async fn find_in_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Appointment>, DomainError> {
        let appointments = self.appointments.read().unwrap();
        let mut result: Vec<Appointment> = appointments
            .values()
            .filter(|a| a.date >= start && a.date <= end)
            .cloned()
            .collect();
        result.sort_by_key(|a| (a.date, a.time));
        Ok(result)
    }
}

// ============================================================================
// In-Memory Availability Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAvailabilityRepository {
    records: Arc<RwLock<Vec<Availability>>>,
}

impl InMemoryAvailabilityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_availability(self, availability: Availability) -> Self {
        {
            let mut records = self.records.write().unwrap();
            records.push(availability);
        }
        self
    }
}

#[async_trait]
impl AvailabilityRepository for InMemoryAvailabilityRepository {
    async fn find_active(
        &self,
        specialist_id: &SpecialistId,
        day_of_week: i16,
    ) -> Result<Option<Availability>, DomainError> {
        let records = self.records.read().unwrap();
        Ok(records
            .iter()
            .find(|a| {
                a.specialist_id == *specialist_id && a.day_of_week == day_of_week && a.is_active
            })
            .cloned())
    }

    async fn find_for_specialist(
        &self,
        specialist_id: &SpecialistId,
    ) -> Result<Vec<Availability>, DomainError> {
        let records = self.records.read().unwrap();
        let mut result: Vec<Availability> = records
            .iter()
            .filter(|a| a.specialist_id == *specialist_id)
            .cloned()
            .collect();
        result.sort_by_key(|a| (a.day_of_week, a.start_time));
        Ok(result)
    }
}

// ============================================================================
// In-Memory Specialist Repository
// ============================================================================

#[derive(Default)]
pub struct InMemorySpecialistRepository {
    specialists: Arc<RwLock<HashMap<SpecialistId, Specialist>>>,
}

impl InMemorySpecialistRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_specialist(self, specialist: Specialist) -> Self {
        self.insert(specialist);
        self
    }

    /// Insert or replace a specialist after construction
    pub fn insert(&self, specialist: Specialist) {
        let mut specialists = self.specialists.write().unwrap();
        specialists.insert(specialist.id, specialist);
    }
}

#[async_trait]
impl SpecialistRepository for InMemorySpecialistRepository {
    async fn find_by_id(&self, id: &SpecialistId) -> Result<Option<Specialist>, DomainError> {
        let specialists = self.specialists.read().unwrap();
        Ok(specialists.get(id).cloned())
    }

    async fn find_in_specialty(
        &self,
        id: &SpecialistId,
        specialty_id: &SpecialtyId,
    ) -> Result<Option<Specialist>, DomainError> {
        let specialists = self.specialists.read().unwrap();
        Ok(specialists
            .get(id)
            .filter(|s| s.specialty_id == *specialty_id)
            .cloned())
    }

    async fn list_by_specialty(
        &self,
        specialty_id: &SpecialtyId,
    ) -> Result<Vec<Specialist>, DomainError> {
        let specialists = self.specialists.read().unwrap();
        let mut result: Vec<Specialist> = specialists
            .values()
            .filter(|s| s.specialty_id == *specialty_id && s.is_active)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.first_name.cmp(&b.first_name));
        Ok(result)
    }
}

// ============================================================================
// In-Memory Specialty Repository
// ============================================================================

#[derive(Default)]
pub struct InMemorySpecialtyRepository {
    specialties: Arc<RwLock<HashMap<SpecialtyId, Specialty>>>,
}

impl InMemorySpecialtyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_specialty(self, specialty: Specialty) -> Self {
        self.insert(specialty);
        self
    }

    /// Insert or replace a specialty after construction
    pub fn insert(&self, specialty: Specialty) {
        let mut specialties = self.specialties.write().unwrap();
        specialties.insert(specialty.id, specialty);
    }
}

#[async_trait]
impl SpecialtyRepository for InMemorySpecialtyRepository {
    async fn find_by_id(&self, id: &SpecialtyId) -> Result<Option<Specialty>, DomainError> {
        let specialties = self.specialties.read().unwrap();
        Ok(specialties.get(id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Specialty>, DomainError> {
        let specialties = self.specialties.read().unwrap();
        let mut result: Vec<Specialty> = specialties
            .values()
            .filter(|s| s.is_active)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }
}

// ============================================================================
// In-Memory Admin Directory
// ============================================================================

#[derive(Default)]
pub struct InMemoryAdminDirectory {
    admins: Arc<RwLock<Vec<Admin>>>,
}

impl InMemoryAdminDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_admin(self, admin: Admin) -> Self {
        {
            let mut admins = self.admins.write().unwrap();
            admins.push(admin);
        }
        self
    }
}

#[async_trait]
impl AdminDirectory for InMemoryAdminDirectory {
    async fn find_by_api_key_hash(&self, hash: &str) -> Result<Option<Admin>, DomainError> {
        let admins = self.admins.read().unwrap();
        Ok(admins
            .iter()
            .find(|a| a.api_key_hash == hash && a.is_active)
            .cloned())
    }
}

// ============================================================================
// Recording Mailer
// ============================================================================

/// A mailer that records enqueued emails and can be made to fail
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Arc<RwLock<Vec<(EmailKind, AppointmentId)>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let mailer = Self::default();
        *mailer.should_fail.write().unwrap() = true;
        mailer
    }

    pub fn sent_kinds(&self) -> Vec<EmailKind> {
        self.sent.read().unwrap().iter().map(|(k, _)| *k).collect()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn enqueue(&self, kind: EmailKind, appointment: &Appointment) -> Result<(), MailError> {
        if *self.should_fail.read().unwrap() {
            return Err(MailError::Relay {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }
        self.sent.write().unwrap().push((kind, appointment.id));
        Ok(())
    }
}

// ============================================================================
// Recording Webhook Sink
// ============================================================================

/// A webhook sink that records dispatched events and can be made to fail
#[derive(Default)]
pub struct RecordingWebhookSink {
    pub events: Arc<RwLock<Vec<(WebhookEvent, String)>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl RecordingWebhookSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let sink = Self::default();
        *sink.should_fail.write().unwrap() = true;
        sink
    }

    pub fn event_kinds(&self) -> Vec<WebhookEvent> {
        self.events.read().unwrap().iter().map(|(e, _)| *e).collect()
    }
}

#[async_trait]
impl WebhookSink for RecordingWebhookSink {
    async fn notify(
        &self,
        event: WebhookEvent,
        summary: &AppointmentSummary,
    ) -> Result<(), WebhookError> {
        if *self.should_fail.read().unwrap() {
            return Err(WebhookError::Endpoint {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }
        self.events
            .write()
            .unwrap()
            .push((event, summary.id.clone()));
        Ok(())
    }
}
