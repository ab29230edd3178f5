//! Request middleware and extractors.
//!
//! The shop has a single administrator role, so authorization is one
//! extractor: handlers that manage the catalog or read orders take an
//! [`auth::AdminUser`] argument and reject requests without a valid admin
//! token before any business logic runs.

pub mod auth;
