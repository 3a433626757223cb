//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `inv_core`:
//!
//! - **Database**: MongoDB repositories that push specification criteria
//!   down to the server as BSON filters
//! - **Email**: JSON mail relay client and a log-only sender
//! - **Reports**: plain PDF rendering of product listings
//! - **Seed**: default catalog data inserted on first start

pub mod database;
pub mod email;
pub mod reports;
pub mod seed;

mod error;

pub use database::{
    CategoryDocument, EntityDocument, MongoContext, MongoRepository, NotificationDocument,
    ProductDocument, UserDocument,
};
pub use email::{create_email_sender, HttpEmailSender, LogEmailSender};
pub use error::InfrastructureError;
pub use reports::PdfReportGenerator;
pub use seed::seed_default_categories;
