//! Notification ports
//!
//! Outbound collaborators triggered by lifecycle transitions. Both are
//! best-effort: callers log failures and never let them fail the
//! transition that triggered them.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::entities::Appointment;
use crate::error::{MailError, WebhookError};

/// Kinds of patient email the clinic sends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailKind {
    /// Sent when an admin confirms the appointment
    Confirmation,
    /// Sent when an admin edits an existing appointment
    Edited,
}

impl std::fmt::Display for EmailKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailKind::Confirmation => write!(f, "confirmation"),
            EmailKind::Edited => write!(f, "edited"),
        }
    }
}

/// Events published to the outbound webhook endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WebhookEvent {
    Created,
    Confirmed,
    Cancelled,
    Completed,
}

impl WebhookEvent {
    /// Wire name, e.g. `appointment.created`
    pub fn as_str(&self) -> &'static str {
        match self {
            WebhookEvent::Created => "appointment.created",
            WebhookEvent::Confirmed => "appointment.confirmed",
            WebhookEvent::Cancelled => "appointment.cancelled",
            WebhookEvent::Completed => "appointment.completed",
        }
    }
}

impl std::fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Appointment fields exposed to external consumers
///
/// The unique token is deliberately absent: webhook receivers must not be
/// able to act on a patient's behalf.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentSummary {
    pub id: String,
    pub specialty_id: String,
    pub specialist_id: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub price_cents: i64,
    pub patient_name: String,
    pub patient_email: String,
}

impl From<&Appointment> for AppointmentSummary {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id.to_string(),
            specialty_id: appointment.specialty_id.to_string(),
            specialist_id: appointment.specialist_id.to_string(),
            date: appointment.date.format("%Y-%m-%d").to_string(),
            time: appointment.time.format("%H:%M").to_string(),
            status: appointment.status.to_string(),
            price_cents: appointment.price_cents,
            patient_name: appointment.patient_name.clone(),
            patient_email: appointment.patient_email.clone(),
        }
    }
}

/// Outbound patient email queue
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Enqueue an email about an appointment; delivery is the relay's job
    async fn enqueue(&self, kind: EmailKind, appointment: &Appointment) -> Result<(), MailError>;
}

/// Outbound webhook dispatch
#[async_trait]
pub trait WebhookSink: Send + Sync {
    /// Publish a lifecycle event; best-effort
    async fn notify(
        &self,
        event: WebhookEvent,
        summary: &AppointmentSummary,
    ) -> Result<(), WebhookError>;
}
