//! Admin identity
//!
//! Administration itself (registration, permissions) lives outside this
//! service; the core only needs to know which admin confirmed an
//! appointment, so this stays minimal.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an admin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdminId(pub Uuid);

impl AdminId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AdminId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AdminId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AdminId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An authenticated clinic administrator
#[derive(Debug, Clone, Serialize)]
pub struct Admin {
    pub id: AdminId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub api_key_hash: String,
    pub is_active: bool,
}
