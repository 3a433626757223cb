//! Authentication service module
//!
//! Registration, credential login, refresh-token rotation and logout.
//! Session state lives on the user record as a single refresh token.

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuthService, AuthSession, Registration};
