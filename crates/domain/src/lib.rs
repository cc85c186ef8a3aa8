//! # clima-domain
//!
//! Pure domain model for the clima climate-observation API.
//!
//! ## Responsibilities
//! - Foundational types: station codes, observation dates, error conventions
//! - Define **Stations** (physical observation points with a unique code)
//! - Define **Measurements** (one dated precipitation/temperature reading
//!   attributed to a station)
//! - Define the aggregate shapes the API serves ([`PrecipitationReading`],
//!   [`TemperatureSummary`])
//!
//! The backing dataset is externally owned and read-only from this system's
//! perspective; these types describe its schema explicitly instead of
//! reflecting it at runtime.
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).
//!
//! [`PrecipitationReading`]: measurement::PrecipitationReading
//! [`TemperatureSummary`]: measurement::TemperatureSummary

pub mod date;
pub mod error;
pub mod measurement;
pub mod station;
