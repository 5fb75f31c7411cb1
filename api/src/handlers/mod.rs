//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod appointments;
pub mod catalog;

pub use appointments::{
    book_appointment, cancel_by_token, complete_appointment, confirm_appointment,
    edit_appointment, get_appointment, get_available_slots, get_by_token, get_calendar,
    list_appointments,
};
pub use catalog::{list_specialists, list_specialties};
