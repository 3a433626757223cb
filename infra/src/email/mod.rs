//! Email Module
//!
//! Implementations of the core `EmailSender` port:
//!
//! - **HTTP relay**: one JSON POST per message to a transactional
//!   mail API; failures are reported, not retried
//! - **Log sender**: writes the message summary to the log, used when
//!   delivery is disabled

use std::sync::Arc;

use inv_core::services::EmailSender;
use inv_shared::config::EmailConfig;

mod http;
mod log;


pub use self::http::HttpEmailSender;
pub use self::log::LogEmailSender;

/// Create the sender selected by configuration
///
/// Falls back to [`LogEmailSender`] when delivery is disabled or the relay
/// client cannot be built.
///
/// # Arguments
///
/// * `config` - Mail relay settings
///
/// # Returns
///
/// A shared email sender
pub fn create_email_sender(config: &EmailConfig) -> Arc<dyn EmailSender> {
    if !config.enabled {
        tracing::info!("Email delivery disabled, messages will only be logged");
        return Arc::new(LogEmailSender::new());
    }

    match HttpEmailSender::new(config) {
        Ok(sender) => Arc::new(sender),
        Err(e) => {
            tracing::error!("Failed to initialize mail relay client: {}", e);
            tracing::warn!("Falling back to log-only email sender");
            Arc::new(LogEmailSender::new())
        }
    }
}

/// Mask an email address for logging, e.g. "a***@example.com"
pub fn mask_email(address: &str) -> String {
    match address.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
