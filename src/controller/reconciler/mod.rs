//! # Reconciler
//!
//! Decides which Helm action a HelmRelease needs next and records the outcome.
//!
//! ## Flow
//!
//! 1. [`mark_progressing`] resets the conditions when a cycle starts
//! 2. The `should_*` functions in [`decision`] gate each Helm action
//! 3. [`record_success`] or [`record_failure`] writes the attempt back to the status
//!
//! Decisions read the status; recording mutates an exclusively held status in place.
//! The caller must ensure a single writer per status.

pub mod decision;
pub mod readiness;
pub mod values;

pub use decision::{should_rollback, should_test, should_uninstall, should_upgrade};
pub use readiness::{mark_progressing, record_failure, record_success, set_readiness};
pub use values::values_checksum;

use crate::crd::HelmRelease;

/// Values observed for a release at the start of a reconciliation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseObservation {
    /// Revision of the chart source
    pub revision: String,
    /// Revision of the latest entry in the Helm release history
    pub release_revision: i64,
    /// Checksum of the resolved values
    pub values_checksum: String,
    /// Generation of the HelmRelease
    pub generation: i64,
}

impl ReleaseObservation {
    pub fn new(
        revision: impl Into<String>,
        release_revision: i64,
        values_checksum: impl Into<String>,
        generation: i64,
    ) -> Self {
        Self {
            revision: revision.into(),
            release_revision,
            values_checksum: values_checksum.into(),
            generation,
        }
    }

    /// Observation for the given HelmRelease, taking the generation from its metadata
    pub fn for_release(
        hr: &HelmRelease,
        revision: impl Into<String>,
        release_revision: i64,
        values_checksum: impl Into<String>,
    ) -> Self {
        Self::new(revision, release_revision, values_checksum, hr.generation())
    }
}
