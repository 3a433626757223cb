//! Outbound email port.

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Sends an HTML email
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver one message
    ///
    /// # Arguments
    /// * `to` - Recipient address
    /// * `subject` - Subject line
    /// * `html_body` - HTML content
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> DomainResult<()>;
}
