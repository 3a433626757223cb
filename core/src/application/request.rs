//! Request contract, caller identity and access policies

use inv_shared::FieldErrors;

use crate::domain::entities::{Claims, UserRole};
use crate::errors::{AuthError, DomainResult};

/// Who may send a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// No authentication required
    Anonymous,
    /// Any authenticated user
    Authenticated,
    /// Employees and administrators
    EmployeeOrAdmin,
    /// Administrators only
    AdminOnly,
}

impl AccessPolicy {
    /// Check the caller against the policy
    ///
    /// # Returns
    /// * `Err(AuthError::NotAuthenticated)` - Policy needs a caller and there is none
    /// * `Err(AuthError::InsufficientPermissions)` - Caller's role is not allowed
    pub fn check(&self, ctx: &RequestContext) -> Result<(), AuthError> {
        if *self == AccessPolicy::Anonymous {
            return Ok(());
        }

        let user = ctx.user().ok_or(AuthError::NotAuthenticated)?;
        let allowed = match self {
            AccessPolicy::Anonymous | AccessPolicy::Authenticated => true,
            AccessPolicy::EmployeeOrAdmin => {
                matches!(user.role, UserRole::Employee | UserRole::Administrator)
            }
            AccessPolicy::AdminOnly => user.role == UserRole::Administrator,
        };

        if allowed {
            Ok(())
        } else {
            Err(AuthError::InsufficientPermissions)
        }
    }
}

/// Authenticated caller, taken from verified access token claims
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub role: UserRole,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Per-request ambient data passed to every handler
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    user: Option<CurrentUser>,
}

impl RequestContext {
    /// Context without a caller
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// Context for an authenticated caller
    pub fn authenticated(user: CurrentUser) -> Self {
        Self { user: Some(user) }
    }

    /// The caller, if authenticated
    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    /// The caller, or `NotAuthenticated`
    pub fn require_user(&self) -> DomainResult<&CurrentUser> {
        self.user.as_ref().ok_or_else(|| AuthError::NotAuthenticated.into())
    }
}

/// A command or query handled by exactly one handler
pub trait Request: Send + Sync + 'static {
    /// Data returned on success
    type Output: Send + 'static;

    /// Name used in logs
    const NAME: &'static str;

    /// Who may send this request
    const POLICY: AccessPolicy;

    /// Shape validation run before the handler
    fn validate_request(&self) -> Result<(), FieldErrors> {
        Ok(())
    }
}
