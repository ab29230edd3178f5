//! Configuration loaded from environment variables (via dotenvy at startup).
//!
//! - [`auth`]: Admin credential and JWT settings
//! - [`cors`]: Allowed CORS origins
//! - [`database`]: SQLite connection pool initialization

pub mod auth;
pub mod cors;
pub mod database;
