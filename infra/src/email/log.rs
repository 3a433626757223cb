//! Log-only email sender

use async_trait::async_trait;
use tracing::info;

use inv_core::errors::DomainResult;
use inv_core::services::EmailSender;

use super::mask_email;

/// Accepts every message and logs its envelope
#[derive(Debug, Default, Clone)]
pub struct LogEmailSender;

impl LogEmailSender {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> DomainResult<()> {
        info!(
            to = %mask_email(to),
            subject,
            body_length = html_body.len(),
            "Email not delivered, logging only"
        );
        Ok(())
    }
}
