//! Feature modules. Each follows the same structure:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business logic over the database pool
//! - `model.rs`: entities, DTOs, and query parameters
//! - `router.rs`: axum router wiring

pub mod auth;
pub mod cakes;
pub mod movies;
pub mod orders;
pub mod reviews;
pub mod shop;
pub mod students;
