//! Use-case services composing port queries.

pub mod climate_service;
