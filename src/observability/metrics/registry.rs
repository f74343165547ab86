//! # Metrics Registry
//!
//! Prometheus metrics registry setup and registration.

use anyhow::Result;
use prometheus::Registry;
use std::sync::LazyLock;

/// Global Prometheus metrics registry
pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Register all metrics with the Prometheus registry
///
/// Prometheus metrics are reference counted internally, so registering clones is cheap.
#[allow(
    clippy::missing_errors_doc,
    reason = "Error documentation is provided in doc comments"
)]
pub fn register_metrics() -> Result<()> {
    super::release_metrics::register_release_metrics()?;
    Ok(())
}

/// Handle to the global registry, for exposing metrics from the driver
pub fn registry() -> &'static Registry {
    &REGISTRY
}
