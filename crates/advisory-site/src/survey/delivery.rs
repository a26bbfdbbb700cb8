use std::time::Duration;

use tracing::{info, warn};

use super::machine::SurveyCommand;
use super::report::{RelayPayload, Report};
use crate::config::RelayConfig;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("form relay transport failed: {0}")]
    Transport(String),
    #[error("form relay rejected submission with status {0}")]
    Status(u16),
}

/// Outbound hook for survey results (form relay, test doubles).
pub trait ReportDelivery: Send + Sync {
    fn deliver(&self, payload: &RelayPayload) -> Result<(), DeliveryError>;
}

/// Posts payloads as JSON to a hosted form relay that forwards them to an inbox.
#[derive(Debug, Clone)]
pub struct FormRelayClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl FormRelayClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, DeliveryError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| DeliveryError::Transport(err.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ReportDelivery for FormRelayClient {
    fn deliver(&self, payload: &RelayPayload) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .map_err(|err| DeliveryError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(DeliveryError::Status(status.as_u16()))
        }
    }
}

/// Used when no relay endpoint is configured; submissions are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledDelivery;

impl ReportDelivery for DisabledDelivery {
    fn deliver(&self, payload: &RelayPayload) -> Result<(), DeliveryError> {
        info!(
            subject = payload.subject().unwrap_or_default(),
            "form relay disabled; submission dropped"
        );
        Ok(())
    }
}

/// Picks the relay client when an endpoint is configured.
pub fn delivery_from_config(
    config: &RelayConfig,
) -> Result<Box<dyn ReportDelivery>, DeliveryError> {
    match &config.endpoint {
        Some(endpoint) => Ok(Box::new(FormRelayClient::new(
            endpoint.clone(),
            config.timeout,
        )?)),
        None => Ok(Box::new(DisabledDelivery)),
    }
}

/// Builds the payload for `command` and hands it to `delivery`.
///
/// Best effort: failures are logged and swallowed, never retried, and never reach the respondent.
pub fn dispatch(command: &SurveyCommand, report: &Report, delivery: &dyn ReportDelivery) {
    let (kind, payload) = match command {
        SurveyCommand::DeliverResults => ("results", RelayPayload::results(report)),
        SurveyCommand::EmailResults { reply_to } => {
            ("email", RelayPayload::email_request(report, reply_to))
        }
    };

    match delivery.deliver(&payload) {
        Ok(()) => info!(kind, total = report.total, "survey submission delivered"),
        Err(err) => warn!(kind, %err, "survey submission failed"),
    }
}
