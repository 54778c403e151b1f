//! Delivery of contact messages.
//!
//! The form never talks to the network itself; it hands validated fields to a
//! [`ContactTransport`] and applies whatever outcome comes back.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;
use uuid::Uuid;

use super::form::ContactFields;
use crate::config::PortfolioConfig;
use crate::error::{CoreError, Result};

/// Why a message could not be delivered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// No answer within the configured timeout.
    #[error("delivery timed out")]
    Timeout,

    /// The receiver answered with a non-success status.
    #[error("delivery rejected with status {status}")]
    Rejected { status: u16 },

    /// Connection-level failure.
    #[error("network error: {0}")]
    Network(String),
}

impl TransportError {
    /// Short sentence suitable for a toast.
    pub fn user_message(&self) -> &'static str {
        match self {
            TransportError::Timeout => "The server took too long to respond",
            TransportError::Rejected { .. } => "The server refused the message",
            TransportError::Network(_) => "The server could not be reached",
        }
    }
}

/// Proof of delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub id: Uuid,
    pub delivered_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            delivered_at: Utc::now(),
        }
    }
}

impl Default for Receipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Something that can deliver a contact message.
#[async_trait]
pub trait ContactTransport: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Delivers one message.
    async fn submit(&self, fields: &ContactFields) -> std::result::Result<Receipt, TransportError>;
}

/// Waits a fixed delay, then reports success. Nothing leaves the process.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl ContactTransport for SimulatedTransport {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn submit(&self, fields: &ContactFields) -> std::result::Result<Receipt, TransportError> {
        debug!(
            delay_ms = self.delay.as_millis() as u64,
            subject = %fields.subject,
            "simulating contact delivery"
        );
        tokio::time::sleep(self.delay).await;
        Ok(Receipt::new())
    }
}

/// JSON body posted by [`WebhookTransport`].
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    pub sent_at: DateTime<Utc>,
}

/// Posts each message as JSON to a configured URL.
#[derive(Debug, Clone)]
pub struct WebhookTransport {
    client: reqwest::Client,
    url: Url,
}

impl WebhookTransport {
    /// Creates a transport with a per-request timeout.
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ContactTransport for WebhookTransport {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn submit(&self, fields: &ContactFields) -> std::result::Result<Receipt, TransportError> {
        let payload = WebhookPayload {
            name: &fields.name,
            email: &fields.email,
            subject: &fields.subject,
            message: &fields.message,
            sent_at: Utc::now(),
        };

        debug!(url = %self.url, "posting contact message");

        let response = self
            .client
            .post(self.url.clone())
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Rejected {
                status: status.as_u16(),
            });
        }

        let receipt = Receipt::new();
        info!(url = %self.url, receipt = %receipt.id, "contact message delivered");
        Ok(receipt)
    }
}

/// Picks the transport the config asks for.
///
/// A webhook URL selects [`WebhookTransport`]; otherwise messages are
/// simulated with the configured delay.
pub fn transport_from_config(config: &PortfolioConfig) -> Result<Arc<dyn ContactTransport>> {
    match &config.webhook_url {
        Some(url) => Ok(Arc::new(WebhookTransport::new(
            url.clone(),
            config.webhook_timeout,
        )?)),
        None => Ok(Arc::new(SimulatedTransport::new(config.submit_delay))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_transport_waits_delay() {
        let transport = SimulatedTransport::new(Duration::from_secs(1));
        let start = tokio::time::Instant::now();

        let receipt = transport.submit(&ContactFields::default()).await;

        assert!(receipt.is_ok());
        assert!(start.elapsed() >= Duration::from_secs(1));
    }

    #[test]
    fn test_transport_from_config() {
        let config = PortfolioConfig::default();
        assert_eq!(transport_from_config(&config).unwrap().name(), "simulated");

        let config = PortfolioConfig::default()
            .with_webhook(Url::parse("http://127.0.0.1:9/hook").unwrap());
        assert_eq!(transport_from_config(&config).unwrap().name(), "webhook");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TransportError::Rejected { status: 502 }.to_string(),
            "delivery rejected with status 502"
        );
        assert_eq!(TransportError::Timeout.to_string(), "delivery timed out");
    }
}
