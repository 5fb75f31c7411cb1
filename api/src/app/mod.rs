//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod booking_service;
pub mod lifecycle_service;
pub mod slot_service;

pub use booking_service::{generate_access_token, BookingService, NewBooking};
pub use lifecycle_service::LifecycleService;
pub use slot_service::SlotService;
