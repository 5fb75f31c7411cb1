//! Specialist domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::specialty::SpecialtyId;

/// Unique identifier for a specialist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecialistId(pub Uuid);

impl SpecialistId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SpecialistId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SpecialistId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SpecialistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A practitioner who accepts appointments within one specialty
#[derive(Debug, Clone, Serialize)]
pub struct Specialist {
    pub id: SpecialistId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub is_active: bool,
    pub specialty_id: SpecialtyId,
    pub created_at: DateTime<Utc>,
}

impl Specialist {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn full_name_joins_first_and_last() {
        let specialist = Specialist {
            id: SpecialistId::new(),
            first_name: "Maria".to_string(),
            last_name: "Gonzalez".to_string(),
            email: "maria@clinic.test".to_string(),
            phone: None,
            bio: None,
            photo_url: None,
            is_active: true,
            specialty_id: SpecialtyId::new(),
            created_at: Utc::now(),
        };
        assert_eq!(specialist.full_name(), "Maria Gonzalez");
    }
}
