//! # clima-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that the storage adapter must implement
//!   (driven/outbound port): [`MeasurementRepository`] — the read-only
//!   query surface over the climate dataset
//! - Provide the **use-case layer**: [`ClimateService`] composes port
//!   queries into the shapes the HTTP surface serves, with the repository
//!   injected explicitly (no module-level globals)
//!
//! ## Dependency rule
//! Depends on `clima-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.
//!
//! [`MeasurementRepository`]: ports::MeasurementRepository
//! [`ClimateService`]: services::climate_service::ClimateService

pub mod ports;
pub mod services;
