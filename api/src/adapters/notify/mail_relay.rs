//! HTTP mail relay
//!
//! Hands rendered-mail requests to an external relay service; templating
//! and delivery retries are the relay's concern. Without a configured
//! relay URL, emails are logged and dropped.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::domain::entities::Appointment;
use crate::domain::ports::{EmailKind, Mailer};
use crate::error::MailError;

const RELAY_TIMEOUT: Duration = Duration::from_secs(5);

/// Email job handed to the relay
#[derive(Serialize)]
struct MailJob {
    kind: String,
    recipient: String,
    patient_name: String,
    appointment_date: String,
    appointment_time: String,
    price_cents: i64,
    /// Self-service link for the patient (view / cancel)
    manage_url: String,
}

/// Mailer posting jobs to an HTTP relay
pub struct HttpMailRelay {
    http: Client,
    relay_url: Option<String>,
    frontend_url: String,
}

impl HttpMailRelay {
    pub fn new(relay_url: Option<String>, frontend_url: String) -> Self {
        Self {
            http: Client::new(),
            relay_url,
            frontend_url: frontend_url.trim_end_matches('/').to_string(),
        }
    }

    fn manage_url(&self, appointment: &Appointment) -> String {
        format!("{}/appointment/{}", self.frontend_url, appointment.unique_token)
    }
}

#[async_trait]
impl Mailer for HttpMailRelay {
    async fn enqueue(&self, kind: EmailKind, appointment: &Appointment) -> Result<(), MailError> {
        let Some(relay_url) = &self.relay_url else {
            tracing::warn!(
                kind = %kind,
                appointment_id = %appointment.id,
                "mail relay not configured, email not sent"
            );
            return Ok(());
        };

        let job = MailJob {
            kind: kind.to_string(),
            recipient: appointment.patient_email.clone(),
            patient_name: appointment.patient_name.clone(),
            appointment_date: appointment.date.format("%Y-%m-%d").to_string(),
            appointment_time: appointment.time.format("%H:%M").to_string(),
            price_cents: appointment.price_cents,
            manage_url: self.manage_url(appointment),
        };

        let response = self
            .http
            .post(relay_url)
            .timeout(RELAY_TIMEOUT)
            .json(&job)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(kind = %kind, appointment_id = %appointment.id, "email enqueued");
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(MailError::Relay {
                status: status.as_u16(),
                message,
            })
        }
    }
}
