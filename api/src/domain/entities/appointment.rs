//! Appointment domain entity
//!
//! An appointment occupies one slot on a specialist's daily grid and moves
//! through a small state machine: pending -> confirmed -> completed, with
//! cancellation possible from any non-completed state.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::admin::AdminId;
use super::specialist::SpecialistId;
use super::specialty::SpecialtyId;

/// Unique identifier for an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppointmentId(pub Uuid);

impl AppointmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AppointmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AppointmentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Appointment status
///
/// Statuses in [`AppointmentStatus::occupies_slot`] hold their slot on the
/// grid; a cancelled appointment releases it immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    /// Statuses that keep a slot occupied
    pub const ACTIVE: [AppointmentStatus; 3] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
    ];

    /// Whether an appointment in this status occupies its slot
    pub fn occupies_slot(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled)
    }

    /// Terminal statuses admit no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Cancelled | AppointmentStatus::Completed
        )
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "completed" => Ok(AppointmentStatus::Completed),
            _ => Err(format!("Unknown appointment status: {}", s)),
        }
    }
}

/// A booked appointment
#[derive(Debug, Clone, Serialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub specialty_id: SpecialtyId,
    pub specialist_id: SpecialistId,
    /// Calendar date in clinic-local terms; never shifted across timezones
    pub date: NaiveDate,
    /// Start of the slot, minute precision on the hourly grid
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    /// Price at booking time, in cents
    pub price_cents: i64,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    /// Unguessable public handle for unauthenticated view/cancel
    pub unique_token: String,
    pub notes: Option<String>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub confirmed_by: Option<AdminId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Whether this appointment currently occupies its slot
    pub fn occupies_slot(&self) -> bool {
        self.status.occupies_slot()
    }

    /// Confirm/reject decisions are only legal while pending
    pub fn can_decide(&self) -> bool {
        self.status == AppointmentStatus::Pending
    }

    /// Completion is only legal from confirmed
    pub fn can_complete(&self) -> bool {
        self.status == AppointmentStatus::Confirmed
    }

    /// Patients may cancel anything that is not completed
    pub fn can_cancel(&self) -> bool {
        self.status != AppointmentStatus::Completed
    }

    /// Field edits are disallowed once the appointment is terminal
    pub fn can_edit(&self) -> bool {
        !self.status.is_terminal()
    }
}

/// Data needed to create a new appointment
///
/// Built by the booking engine after validation; the store persists it with
/// status pending.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub specialty_id: SpecialtyId,
    pub specialist_id: SpecialistId,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub price_cents: i64,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub unique_token: String,
    pub notes: Option<String>,
}

/// Admin decision on a pending appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmDecision {
    /// Accept the appointment
    Confirm,
    /// Reject it; the appointment transitions to cancelled
    Reject,
}

/// Field changes for an existing appointment; all optional
///
/// Status is deliberately absent: only the lifecycle operations
/// (confirm/complete/cancel) transition it.
#[derive(Debug, Clone, Default)]
pub struct EditAppointment {
    pub specialty_id: Option<SpecialtyId>,
    pub specialist_id: Option<SpecialistId>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub patient_name: Option<String>,
    pub patient_email: Option<String>,
    pub patient_phone: Option<String>,
    pub notes: Option<String>,
}

impl EditAppointment {
    /// Whether the edit moves the appointment to a different slot key
    pub fn touches_slot(&self) -> bool {
        self.specialist_id.is_some() || self.date.is_some() || self.time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_appointment(status: AppointmentStatus) -> Appointment {
        Appointment {
            id: AppointmentId::new(),
            specialty_id: SpecialtyId::new(),
            specialist_id: SpecialistId::new(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            status,
            price_cents: 5000,
            patient_name: "Test Patient".to_string(),
            patient_email: "patient@example.com".to_string(),
            patient_phone: "+34 600 000 000".to_string(),
            unique_token: "tok123456789".to_string(),
            notes: None,
            confirmed_at: None,
            confirmed_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn active_statuses_occupy_slots() {
        assert!(AppointmentStatus::Pending.occupies_slot());
        assert!(AppointmentStatus::Confirmed.occupies_slot());
        assert!(AppointmentStatus::Completed.occupies_slot());
        assert!(!AppointmentStatus::Cancelled.occupies_slot());
    }

    #[test]
    fn terminal_statuses() {
        assert!(!AppointmentStatus::Pending.is_terminal());
        assert!(!AppointmentStatus::Confirmed.is_terminal());
        assert!(AppointmentStatus::Cancelled.is_terminal());
        assert!(AppointmentStatus::Completed.is_terminal());
    }

    #[test]
    fn only_pending_can_be_decided() {
        assert!(make_appointment(AppointmentStatus::Pending).can_decide());
        assert!(!make_appointment(AppointmentStatus::Confirmed).can_decide());
        assert!(!make_appointment(AppointmentStatus::Cancelled).can_decide());
        assert!(!make_appointment(AppointmentStatus::Completed).can_decide());
    }

    #[test]
    fn only_confirmed_can_complete() {
        assert!(make_appointment(AppointmentStatus::Confirmed).can_complete());
        assert!(!make_appointment(AppointmentStatus::Pending).can_complete());
        assert!(!make_appointment(AppointmentStatus::Cancelled).can_complete());
        assert!(!make_appointment(AppointmentStatus::Completed).can_complete());
    }

    #[test]
    fn completed_cannot_be_cancelled() {
        assert!(make_appointment(AppointmentStatus::Pending).can_cancel());
        assert!(make_appointment(AppointmentStatus::Confirmed).can_cancel());
        assert!(make_appointment(AppointmentStatus::Cancelled).can_cancel());
        assert!(!make_appointment(AppointmentStatus::Completed).can_cancel());
    }

    #[test]
    fn terminal_appointments_cannot_be_edited() {
        assert!(make_appointment(AppointmentStatus::Pending).can_edit());
        assert!(make_appointment(AppointmentStatus::Confirmed).can_edit());
        assert!(!make_appointment(AppointmentStatus::Cancelled).can_edit());
        assert!(!make_appointment(AppointmentStatus::Completed).can_edit());
    }

    #[test]
    fn status_display_round_trips() {
        for status in [
            AppointmentStatus::Pending,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::Completed,
        ] {
            assert_eq!(
                status.to_string().parse::<AppointmentStatus>().unwrap(),
                status
            );
        }
        assert!("invalid".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn edit_touches_slot_detection() {
        assert!(!EditAppointment::default().touches_slot());
        assert!(EditAppointment {
            time: Some(NaiveTime::from_hms_opt(11, 0, 0).unwrap()),
            ..Default::default()
        }
        .touches_slot());
        assert!(EditAppointment {
            specialist_id: Some(SpecialistId::new()),
            ..Default::default()
        }
        .touches_slot());
        assert!(!EditAppointment {
            patient_name: Some("New Name".to_string()),
            ..Default::default()
        }
        .touches_slot());
    }
}
