//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod notify;
pub mod repositories;

pub use notify::{AppointmentSummary, EmailKind, Mailer, WebhookEvent, WebhookSink};
pub use repositories::{
    AdminDirectory, AppointmentRepository, AvailabilityRepository, SpecialistRepository,
    SpecialtyRepository,
};
