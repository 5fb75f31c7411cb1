//! HTTP webhook sink
//!
//! Posts lifecycle events to a configured automation endpoint. Best-effort:
//! the caller logs and moves on; an unconfigured URL just skips delivery.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::domain::ports::{AppointmentSummary, WebhookEvent, WebhookSink};
use crate::error::WebhookError;

const DISPATCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Payload shape expected by the automation endpoint
#[derive(Serialize)]
struct WebhookPayload<'a> {
    event: &'static str,
    timestamp: String,
    data: &'a AppointmentSummary,
}

/// Webhook sink posting JSON to a single configured endpoint
pub struct HttpWebhookSink {
    http: Client,
    endpoint: Option<String>,
}

impl HttpWebhookSink {
    /// `endpoint` of `None` disables dispatch (logged on each event)
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl WebhookSink for HttpWebhookSink {
    async fn notify(
        &self,
        event: WebhookEvent,
        summary: &AppointmentSummary,
    ) -> Result<(), WebhookError> {
        let Some(endpoint) = &self.endpoint else {
            tracing::warn!(event = %event, "webhook endpoint not configured, event not sent");
            return Ok(());
        };

        let payload = WebhookPayload {
            event: event.as_str(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            data: summary,
        };

        let response = self
            .http
            .post(endpoint)
            .timeout(DISPATCH_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(event = %event, status = %status, "webhook dispatched");
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(WebhookError::Endpoint {
                status: status.as_u16(),
                message,
            })
        }
    }
}
