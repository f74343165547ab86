//! # Metrics Module
//!
//! Prometheus metrics for monitoring release reconciliation.
//!
//! ## Sub-modules
//!
//! - `registry` - Metrics registry setup and registration
//! - `release_metrics` - Recorded attempts and condition resets

pub mod registry;
pub mod release_metrics;

pub use registry::*;
pub use release_metrics::*;
