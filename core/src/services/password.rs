//! Password hashing with bcrypt.

use crate::errors::{DomainError, DomainResult};

/// Salted adaptive hashing; two hashes of the same password never match
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    /// Create a hasher with an explicit work factor (4..=31)
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(4, 31),
        }
    }

    /// Hash a password with a fresh random salt
    pub fn hash(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    /// Check a password against a stored hash
    ///
    /// A malformed stored hash verifies as false.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        match bcrypt::verify(password, hash) {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be verified");
                false
            }
        }
    }
}
