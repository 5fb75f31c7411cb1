//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod notify;
pub mod postgres;

pub use notify::{HttpMailRelay, HttpWebhookSink};
pub use postgres::{
    PostgresAdminDirectory, PostgresAppointmentRepository, PostgresAvailabilityRepository,
    PostgresSpecialistRepository, PostgresSpecialtyRepository,
};
