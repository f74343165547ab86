//! # Release Metrics
//!
//! Metrics for recorded release attempts and condition resets.

use crate::observability::metrics::registry::REGISTRY;
use anyhow::Result;
use prometheus::{IntCounter, IntCounterVec};
use std::sync::LazyLock;

static RELEASE_ATTEMPTS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "helm_release_attempts_total",
            "Total number of recorded release attempts by outcome",
        ),
        &["outcome"],
    )
    .expect("Failed to create RELEASE_ATTEMPTS_TOTAL metric - this should never happen")
});

static RELEASE_PROGRESSING_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "helm_release_progressing_total",
        "Total number of reconciliations that reset conditions to progressing",
    )
    .expect("Failed to create RELEASE_PROGRESSING_TOTAL metric - this should never happen")
});

/// Register release metrics with the registry
pub(crate) fn register_release_metrics() -> Result<()> {
    REGISTRY.register(Box::new(RELEASE_ATTEMPTS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(RELEASE_PROGRESSING_TOTAL.clone()))?;
    Ok(())
}

pub fn increment_release_succeeded() {
    RELEASE_ATTEMPTS_TOTAL.with_label_values(&["success"]).inc();
}

pub fn increment_release_failed() {
    RELEASE_ATTEMPTS_TOTAL.with_label_values(&["failure"]).inc();
}

pub fn increment_release_progressing() {
    RELEASE_PROGRESSING_TOTAL.inc();
}
