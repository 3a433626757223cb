//! Business services containing domain logic and use cases.

pub mod auth;
pub mod email;
pub mod notification;
pub mod password;
pub mod query;
pub mod report;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthSession, Registration};
pub use email::EmailSender;
pub use notification::NotificationService;
pub use password::PasswordHasher;
pub use report::{ReportGenerator, ReportKind};
pub use token::{TokenService, TokenServiceConfig};
