mod category_tests;
mod notification_tests;

use std::sync::Arc;

use async_trait::async_trait;
use inv_shared::{ApiResponse, PaginationConfig};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::application::{CurrentUser, Handler, Mediator, MediatorDependencies, Request, RequestContext};
use crate::domain::entities::{Category, Notification, Product, User, UserRole};
use crate::errors::DomainResult;
use crate::repositories::{InMemoryRepository, Repository};
use crate::services::{
    EmailSender, PasswordHasher, ReportGenerator, ReportKind, TokenService, TokenServiceConfig,
};

/// Records every email instead of sending it
#[derive(Default)]
pub(super) struct RecordingEmailSender {
    pub sent: Mutex<Vec<String>>,
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, to: &str, _subject: &str, _html_body: &str) -> DomainResult<()> {
        self.sent.lock().await.push(to.to_string());
        Ok(())
    }
}

/// Renders "<title>|<generated_by>|<product names>" as bytes
pub(super) struct TextReportGenerator;

impl ReportGenerator for TextReportGenerator {
    fn render(&self, kind: ReportKind, products: &[Product], generated_by: &str) -> DomainResult<Vec<u8>> {
        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        Ok(format!("{}|{}|{}", kind.title(), generated_by, names.join(",")).into_bytes())
    }
}

pub(super) struct TestApp {
    pub mediator: Mediator,
    pub products: InMemoryRepository<Product>,
    pub categories: InMemoryRepository<Category>,
    pub users: InMemoryRepository<User>,
    pub notifications: InMemoryRepository<Notification>,
    pub emails: Arc<RecordingEmailSender>,
    pub admin: RequestContext,
    pub employee: RequestContext,
}

impl TestApp {
    pub async fn new() -> Self {
        let products = InMemoryRepository::<Product>::new();
        let categories = InMemoryRepository::<Category>::new();
        let users = InMemoryRepository::<User>::new();
        let notifications = InMemoryRepository::<Notification>::new();
        let emails = Arc::new(RecordingEmailSender::default());

        let admin = users
            .add(User::new("admin@example.com", "x".into(), "Ada".into(), "Admin".into(), UserRole::Administrator))
            .await
            .unwrap();
        let employee = users
            .add(User::new("emp@example.com", "x".into(), "Eve".into(), "Employee".into(), UserRole::Employee))
            .await
            .unwrap();

        let mediator = Mediator::new(MediatorDependencies {
            products: Arc::new(products.clone()),
            categories: Arc::new(categories.clone()),
            users: Arc::new(users.clone()),
            notifications: Arc::new(notifications.clone()),
            email_sender: emails.clone(),
            report_generator: Arc::new(TextReportGenerator),
            token_service: Arc::new(TokenService::new(TokenServiceConfig {
                jwt_secret: "test-secret-key-that-is-long-enough-for-hs256".to_string(),
                ..TokenServiceConfig::default()
            })),
            password_hasher: PasswordHasher::new(4),
            pagination: PaginationConfig::default(),
        });

        Self {
            mediator,
            products,
            categories,
            users,
            notifications,
            emails,
            admin: context_for(&admin),
            employee: context_for(&employee),
        }
    }

    /// Send without cancellation
    pub async fn send<R>(&self, request: R, ctx: &RequestContext) -> ApiResponse<R::Output>
    where
        R: Request,
        Mediator: Handler<R>,
    {
        self.mediator.send(request, ctx, &CancellationToken::new()).await
    }
}

pub(super) fn context_for(user: &User) -> RequestContext {
    RequestContext::authenticated(CurrentUser {
        id: user.id.clone(),
        email: user.email.clone(),
        role: user.role,
    })
}
