//! Shared utilities used throughout the application:
//!
//! - [`errors`]: Application error type and HTTP mapping
//! - [`jwt`]: Admin token creation and verification
//! - [`pagination`]: Request pagination utilities
//! - [`password`]: Password hashing and verification

pub mod errors;
pub mod jwt;
pub mod pagination;
pub mod password;
