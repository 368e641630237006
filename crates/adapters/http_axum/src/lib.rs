//! # ludex-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON REST API (`/games`, `/reviews`, `/users`, `/bakeries`,
//!   `/baked_goods`)
//! - Map HTTP requests into application service calls (driving adapter):
//!   form-encoded request bodies in, JSON out
//! - Map application results into HTTP responses with deterministic status
//!   codes (200/201 on success, 404 for typed not-found, 500 for storage
//!   failures)
//!
//! ## Dependency rule
//! Depends on `ludex-app` (for port traits and services) and `ludex-domain`
//! (for domain types used in request/response mapping). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
