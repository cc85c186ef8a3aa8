//! # clima-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the read-only **JSON API** over the climate dataset
//!   (`/api/v1.0/precipitation`, `/api/v1.0/stations`, …)
//! - Serve a plain-text route listing at `/`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses
//!
//! Every request is stateless: one service call, one response. There is
//! no session, pagination, or write path.
//!
//! ## Dependency rule
//! Depends on `clima-app` (for the port trait and service) and
//! `clima-domain` (for types used in response mapping). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
