//! # SweetDelights API
//!
//! A REST backend and admin CLI built with Rust, Axum, and SQLite that
//! consolidates a family of small shop demos into one CRUD application:
//!
//! - **Cakes**: the shop menu, managed by the administrator
//! - **Orders**: customer orders with server-computed receipts
//! - **Reviews**: customer reviews with star ratings
//! - **Movies**: a movie tracker with filters and summary statistics
//! - **Students**: a student-record table, also driven by the CLI shell
//!
//! ## Architecture
//!
//! The codebase follows a modular layout:
//!
//! ```text
//! src/
//! ├── bin/cli.rs        # sweetdelights-cli (student shell, seeder)
//! ├── cli/              # CLI command implementations
//! ├── config/           # Environment configuration (database, auth, CORS)
//! ├── middleware/       # Admin bearer-token extractor
//! ├── modules/          # Feature modules (auth, cakes, orders, ...)
//! └── utils/            # Errors, JWT, password hashing, pagination
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: business logic
//! - `model.rs`: entities and DTOs
//! - `router.rs`: axum router configuration
//!
//! ## Authentication
//!
//! The shop has a single administrator. `POST /api/auth/login` checks the
//! password against a bcrypt hash from the environment and returns a
//! short-lived JWT; catalog management, order listing, and student records
//! require it. Browsing the menu, placing orders, reviews, and the movie
//! tracker are public.
//!
//! ## Quick Start
//!
//! ```bash
//! DATABASE_URL=sqlite://sweetdelights.db?mode=rwc
//! ADMIN_PASSWORD=pick-something-good
//! JWT_SECRET=pick-something-random
//! cargo run --bin sweetdelights
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar` while the
//! server is running.

pub mod cli;
pub mod config;
pub mod db;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
