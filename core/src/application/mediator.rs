//! Mediator: dependency holder and request pipeline

use std::sync::Arc;

use async_trait::async_trait;
use inv_shared::{ApiResponse, PaginationConfig};
use tokio_util::sync::CancellationToken;

use super::request::{Request, RequestContext};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{CategoryRepository, NotificationRepository, ProductRepository, UserRepository};
use crate::services::{
    AuthService, EmailSender, NotificationService, PasswordHasher, ReportGenerator, TokenService,
};

/// Successful handler outcome
#[derive(Debug, Clone)]
pub struct Reply<T> {
    pub data: T,
    pub message: String,
}

impl<T> Reply<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

/// Handles one request type
///
/// Handlers assume the access policy and validation already passed.
#[async_trait]
pub trait Handler<R: Request>: Send + Sync {
    async fn handle(&self, request: R, ctx: &RequestContext) -> DomainResult<Reply<R::Output>>;
}

/// Everything the handlers need, wired by the composition root
pub struct MediatorDependencies {
    pub products: Arc<dyn ProductRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub users: Arc<dyn UserRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
    pub email_sender: Arc<dyn EmailSender>,
    pub report_generator: Arc<dyn ReportGenerator>,
    pub token_service: Arc<TokenService>,
    pub password_hasher: PasswordHasher,
    pub pagination: PaginationConfig,
}

/// Routes requests to their handlers
pub struct Mediator {
    pub(super) products: Arc<dyn ProductRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) notifications: Arc<dyn NotificationRepository>,
    pub(super) auth: AuthService,
    pub(super) notifier: NotificationService,
    pub(super) reports: Arc<dyn ReportGenerator>,
    pub(super) pagination: PaginationConfig,
}

impl Mediator {
    /// Build the mediator and the services it owns
    pub fn new(deps: MediatorDependencies) -> Self {
        let auth = AuthService::new(Arc::clone(&deps.users), deps.token_service, deps.password_hasher);
        let notifier = NotificationService::new(
            Arc::clone(&deps.users),
            Arc::clone(&deps.notifications),
            deps.email_sender,
        );

        Self {
            products: deps.products,
            categories: deps.categories,
            notifications: deps.notifications,
            auth,
            notifier,
            reports: deps.report_generator,
            pagination: deps.pagination,
        }
    }

    /// Dispatch a request through the full pipeline
    ///
    /// 1. Access policy check
    /// 2. Input validation
    /// 3. Handler, aborted when `cancel` fires
    /// 4. Result shaping; faults are logged and replaced with a generic message
    pub async fn send<R>(
        &self,
        request: R,
        ctx: &RequestContext,
        cancel: &CancellationToken,
    ) -> ApiResponse<R::Output>
    where
        R: Request,
        Self: Handler<R>,
    {
        if let Err(e) = R::POLICY.check(ctx) {
            tracing::debug!(request = R::NAME, error = %e, "Request rejected by access policy");
            return failure_response(R::NAME, DomainError::from(e));
        }

        if let Err(errors) = request.validate_request() {
            tracing::debug!(request = R::NAME, fields = errors.len(), "Request failed validation");
            return ApiResponse::validation(errors);
        }

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(DomainError::Cancelled),
            result = <Self as Handler<R>>::handle(self, request, ctx) => result,
        };

        match outcome {
            Ok(reply) => ApiResponse::success(reply.data, reply.message),
            Err(e) => failure_response(R::NAME, e),
        }
    }
}

fn failure_response<T>(request: &'static str, error: DomainError) -> ApiResponse<T> {
    if error.is_fault() {
        tracing::error!(request, error = %error, "Unhandled error while processing request");
    } else {
        tracing::debug!(request, error = %error, "Request failed");
    }

    let kind = error.failure_kind();
    let message = error.public_message();
    match error {
        DomainError::Validation { errors } => ApiResponse::validation(errors),
        _ => ApiResponse::failure(kind, message),
    }
}
