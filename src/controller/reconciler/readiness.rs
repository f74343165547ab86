//! # Readiness Recording
//!
//! Records the outcome of a reconciliation attempt on the HelmRelease status.
//!
//! Every attempt updates the attempted revision, release revision, values checksum and
//! observed generation. Only a success advances the applied revision and clears the
//! failure counter.

use crate::constants::reason;
use crate::controller::reconciler::ReleaseObservation;
use crate::crd::{ConditionStatus, ConditionType, HelmReleaseStatus};
use crate::observability::metrics;
use tracing::{debug, info, warn};

/// Reset the conditions to a single Ready/Unknown condition at the start of a cycle
pub fn mark_progressing(status: &mut HelmReleaseStatus) {
    status.conditions.reset_progressing();
    metrics::increment_release_progressing();
    debug!("Conditions reset to {}", reason::PROGRESSING);
}

/// Set the Ready condition and the attempt bookkeeping
///
/// Called exactly once per attempt, after the Helm action ran.
pub fn set_readiness(
    status: &mut HelmReleaseStatus,
    ready: ConditionStatus,
    reason: &str,
    message: &str,
    observed: &ReleaseObservation,
) {
    status.conditions.upsert(ConditionType::Ready, ready, reason, message);
    status.observed_generation = observed.generation;
    status.last_attempted_revision.clone_from(&observed.revision);
    status.last_release_revision = observed.release_revision;
    status.last_attempted_values_checksum.clone_from(&observed.values_checksum);
}

/// Register a failed release attempt
pub fn record_failure(
    status: &mut HelmReleaseStatus,
    observed: &ReleaseObservation,
    reason: &str,
    message: &str,
) {
    set_readiness(status, ConditionStatus::False, reason, message, observed);
    status.failures = status.failures.saturating_add(1);
    metrics::increment_release_failed();
    warn!(
        "Release attempt for revision {} failed ({}): {} [failures: {}]",
        observed.revision, reason, message, status.failures
    );
}

/// Register a successful release attempt
pub fn record_success(
    status: &mut HelmReleaseStatus,
    observed: &ReleaseObservation,
    reason: &str,
    message: &str,
) {
    set_readiness(status, ConditionStatus::True, reason, message, observed);
    status.last_applied_revision.clone_from(&observed.revision);
    status.failures = 0;
    metrics::increment_release_succeeded();
    info!(
        "Release attempt for revision {} succeeded ({}): {}",
        observed.revision, reason, message
    );
}
