//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod admin;
pub mod appointment;
pub mod availability;
pub mod slot;
pub mod specialist;
pub mod specialty;

pub use admin::{Admin, AdminId};
pub use appointment::{
    Appointment, AppointmentId, AppointmentStatus, ConfirmDecision, EditAppointment,
    NewAppointment,
};
pub use availability::{day_index, Availability, AvailabilityId};
pub use slot::{on_grid, slot_grid, truncate_to_minute, FIRST_SLOT_HOUR, LAST_SLOT_HOUR};
pub use specialist::{Specialist, SpecialistId};
pub use specialty::{Specialty, SpecialtyId};
