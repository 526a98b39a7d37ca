//! Presentation layer for the EcoIntellect sustainability scoring service.
//!
//! The scoring itself happens in an external service; this crate turns its
//! analysis payload into chart-ready view-models and drives the simulated
//! eco-intercept checkout.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod telemetry;
