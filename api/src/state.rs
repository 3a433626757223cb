//! Application state and storage wiring

use std::sync::Arc;

use tracing::info;

use inv_core::application::{Mediator, MediatorDependencies};
use inv_core::domain::entities::{Category, Notification, Product, User};
use inv_core::repositories::{
    CategoryRepository, InMemoryRepository, NotificationRepository, ProductRepository, UserRepository,
};
use inv_core::services::{PasswordHasher, TokenService, TokenServiceConfig};
use inv_infra::email::create_email_sender;
use inv_infra::{
    seed_default_categories, CategoryDocument, InfrastructureError, MongoContext, NotificationDocument,
    PdfReportGenerator, ProductDocument, UserDocument,
};
use inv_shared::{AppConfig, StorageBackend};

/// Repositories for every collection
pub struct Repositories {
    pub products: Arc<dyn ProductRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub users: Arc<dyn UserRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
}

impl Repositories {
    /// Process-local storage
    pub fn in_memory() -> Self {
        Self {
            products: Arc::new(InMemoryRepository::<Product>::new()),
            categories: Arc::new(InMemoryRepository::<Category>::new()),
            users: Arc::new(InMemoryRepository::<User>::new()),
            notifications: Arc::new(InMemoryRepository::<Notification>::new()),
        }
    }

    /// MongoDB collections of a connected context
    pub fn mongo(context: &MongoContext) -> Self {
        Self {
            products: Arc::new(context.repository::<ProductDocument>()),
            categories: Arc::new(context.repository::<CategoryDocument>()),
            users: Arc::new(context.repository::<UserDocument>()),
            notifications: Arc::new(context.repository::<NotificationDocument>()),
        }
    }
}

/// Shared state handed to every request
pub struct AppState {
    pub mediator: Arc<Mediator>,
    pub token_service: Arc<TokenService>,
}

impl AppState {
    /// Wire the mediator over `repositories`
    pub fn new(config: &AppConfig, repositories: Repositories) -> Self {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.jwt)));

        let mediator = Mediator::new(MediatorDependencies {
            products: repositories.products,
            categories: repositories.categories,
            users: repositories.users,
            notifications: repositories.notifications,
            email_sender: create_email_sender(&config.email),
            report_generator: Arc::new(PdfReportGenerator::new()),
            token_service: Arc::clone(&token_service),
            password_hasher: PasswordHasher::new(config.jwt.bcrypt_cost),
            pagination: config.pagination,
        });

        Self {
            mediator: Arc::new(mediator),
            token_service,
        }
    }

    /// Connect the configured backend, seed default data and wire the state
    pub async fn from_config(config: &AppConfig) -> Result<Self, InfrastructureError> {
        let repositories = match config.database.backend {
            StorageBackend::Mongo => {
                let context = MongoContext::connect(&config.database).await?;
                context.ensure_indexes().await?;
                Repositories::mongo(&context)
            }
            StorageBackend::Memory => {
                info!("Using in-memory storage, data is lost on restart");
                Repositories::in_memory()
            }
        };

        seed_default_categories(repositories.categories.as_ref())
            .await
            .map_err(|e| InfrastructureError::Config(format!("Seeding failed: {}", e)))?;

        Ok(Self::new(config, repositories))
    }
}
