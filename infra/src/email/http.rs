//! JSON mail relay client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, error, info};

use inv_core::errors::DomainResult;
use inv_core::services::EmailSender;
use inv_shared::config::EmailConfig;

use super::mask_email;
use crate::error::InfrastructureError;

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct OutboundEmail<'a> {
    from: Address<'a>,
    to: Vec<Address<'a>>,
    subject: &'a str,
    html: &'a str,
}

/// Sends messages through an HTTP mail relay
///
/// Each message is posted exactly once. Callers treat delivery as best-effort
/// and log failures.
pub struct HttpEmailSender {
    client: Client,
    api_url: String,
    api_key: String,
    sender_email: String,
    sender_name: String,
}

impl HttpEmailSender {
    /// Build a relay client from configuration
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        if config.api_url.trim().is_empty() {
            return Err(InfrastructureError::Config("EMAIL_API_URL is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(relay = %config.api_url, "Mail relay client initialized");

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            sender_email: config.sender_email.clone(),
            sender_name: config.sender_name.clone(),
        })
    }

    /// One POST to the relay; failures are classified, never retried
    async fn post(&self, payload: &OutboundEmail<'_>) -> Result<(), InfrastructureError> {
        let mut request = self.client.post(&self.api_url).json(payload);
        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let reason = if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            format!("relay unavailable ({}): {}", status, body)
        } else {
            format!("relay rejected message ({}): {}", status, body)
        };
        error!("Mail relay failure: {}", reason);
        Err(InfrastructureError::Email(reason))
    }
}

#[async_trait]
impl EmailSender for HttpEmailSender {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> DomainResult<()> {
        let payload = OutboundEmail {
            from: Address {
                email: &self.sender_email,
                name: Some(&self.sender_name),
            },
            to: vec![Address { email: to, name: None }],
            subject,
            html: html_body,
        };

        debug!(to = %mask_email(to), "Posting email to relay");
        self.post(&payload).await?;
        info!(to = %mask_email(to), subject, "Email sent");
        Ok(())
    }
}
