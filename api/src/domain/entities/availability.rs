//! Availability domain entity
//!
//! A recurring weekly window during which a specialist accepts bookings.
//! Day indexing is 0 = Sunday .. 6 = Saturday, matching the stored rows.
//!
//! Note: the slot calculator only consults `is_active` for the day; the
//! window's start/end times are stored and exposed but do not clip the
//! canonical grid.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::specialist::SpecialistId;

/// Unique identifier for an availability record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvailabilityId(pub Uuid);

impl AvailabilityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AvailabilityId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AvailabilityId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// Map a chrono weekday onto the stored 0=Sunday..6=Saturday index
pub fn day_index(weekday: Weekday) -> i16 {
    weekday.num_days_from_sunday() as i16
}

/// A weekly availability window for a specialist
#[derive(Debug, Clone, Serialize)]
pub struct Availability {
    pub id: AvailabilityId,
    pub specialist_id: SpecialistId,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_active: bool,
}
