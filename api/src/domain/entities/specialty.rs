//! Specialty domain entity
//!
//! A treatment category offered by the clinic. Its base price is copied
//! onto every appointment booked under it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a specialty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecialtyId(pub Uuid);

impl SpecialtyId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SpecialtyId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SpecialtyId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SpecialtyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A clinic specialty
#[derive(Debug, Clone, Serialize)]
pub struct Specialty {
    pub id: SpecialtyId,
    pub name: String,
    pub description: Option<String>,
    /// Base appointment price in cents
    pub base_price_cents: i64,
    /// Appointment duration in minutes; the grid assumes 60
    pub duration_minutes: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
