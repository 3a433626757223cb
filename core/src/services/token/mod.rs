//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - JWT access token generation and verification
//! - Claim extraction from expired access tokens during refresh
//! - Opaque refresh token generation

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
