//! # clima-adapter-storage-sqlite-sqlx
//!
//! `SQLite` read adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the [`MeasurementRepository`] port defined in
//!   `clima-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Declare the dataset schema via embedded sqlx migrations
//! - Map between database rows and domain types
//!
//! Runtime access is SELECT-only; the dataset itself is loaded and owned
//! by an external process.
//!
//! ## Dependency rule
//! Depends on `clima-app` (for the port trait) and `clima-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.
//!
//! [`MeasurementRepository`]: clima_app::ports::MeasurementRepository

pub mod error;
pub mod measurement_repo;
pub mod pool;

pub use measurement_repo::SqliteMeasurementRepository;
pub use pool::{Config, Database};
