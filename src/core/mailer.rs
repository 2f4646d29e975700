use crate::core::Record;
use crate::utils::error::{ExportError, Result};
use reqwest::blocking::Client;

pub const DEFAULT_REPORT_ENDPOINT: &str = "http://127.0.0.1:5001/api/send-report-email";

/// Posts report payloads to the email backend as JSON.
pub struct ReportMailer {
    endpoint: String,
    client: Client,
}

impl ReportMailer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends `payload` and returns the backend's JSON reply. A non-success
    /// status becomes [`ExportError::EmailRejected`] carrying the backend's
    /// `error` message when it sent one.
    pub fn send(&self, payload: &Record) -> Result<serde_json::Value> {
        tracing::debug!("Sending report email request to: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&payload.to_json())
            .send()?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_success() {
            return Ok(response.json()?);
        }

        let message = response
            .json::<serde_json::Value>()
            .ok()
            .and_then(|body| body.get("error")?.as_str().map(str::to_string))
            .unwrap_or_else(|| "Failed to send email".to_string());

        tracing::error!("❌ Report email rejected ({}): {}", status, message);
        Err(ExportError::EmailRejected {
            status: status.as_u16(),
            message,
        })
    }
}

impl Default for ReportMailer {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_ENDPOINT)
    }
}
