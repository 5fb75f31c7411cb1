//! The canonical slot grid
//!
//! Appointments are fixed one-hour slots from 08:00 to 21:00 inclusive,
//! 14 per day. The grid is the same every day; whether a given day offers
//! any slots at all is decided by the specialist's availability flag.

use chrono::{NaiveTime, Timelike};

/// First bookable hour of the day
pub const FIRST_SLOT_HOUR: u32 = 8;
/// Last bookable hour of the day (the 21:00 slot ends at 22:00)
pub const LAST_SLOT_HOUR: u32 = 21;
/// Slots per day
pub const SLOTS_PER_DAY: usize = (LAST_SLOT_HOUR - FIRST_SLOT_HOUR + 1) as usize;

/// All candidate slots for a day, ascending
pub fn slot_grid() -> Vec<NaiveTime> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .map(|hour| NaiveTime::from_hms_opt(hour, 0, 0).expect("grid hours are valid"))
        .collect()
}

/// Whether a time lands exactly on the canonical grid
pub fn on_grid(time: NaiveTime) -> bool {
    time.minute() == 0
        && time.second() == 0
        && (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR).contains(&time.hour())
}

/// Truncate a stored time to minute precision
///
/// The time column may carry seconds; slots compare at minute precision.
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).expect("truncation keeps a valid time")
}
