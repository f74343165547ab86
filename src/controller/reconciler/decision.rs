//! # Action Decisions
//!
//! Pure functions deciding whether a Helm upgrade, test, rollback or uninstall is due.
//!
//! Each function only reads the status and the freshly observed values. Settings must be
//! resolved beforehand, so none of these functions deal with absent configuration.

use crate::controller::reconciler::ReleaseObservation;
use crate::crd::{ConditionStatus, ConditionType, HelmReleaseStatus};
use tracing::debug;

/// Whether an upgrade needs to be performed
///
/// An upgrade is due when anything changed since the last attempt (source revision,
/// release history, generation or values), or when the last attempt failed and the
/// retry budget is not exhausted. A negative `max_retries` means unlimited retries.
pub fn should_upgrade(
    status: &HelmReleaseStatus,
    observed: &ReleaseObservation,
    max_retries: i64,
) -> bool {
    if status.last_attempted_revision != observed.revision {
        debug!(
            "Upgrade due: source revision changed ({:?} -> {:?})",
            status.last_attempted_revision, observed.revision
        );
        return true;
    }
    if status.last_release_revision != observed.release_revision {
        debug!(
            "Upgrade due: release revision changed ({} -> {})",
            status.last_release_revision, observed.release_revision
        );
        return true;
    }
    if status.observed_generation != observed.generation {
        debug!(
            "Upgrade due: generation changed ({} -> {})",
            status.observed_generation, observed.generation
        );
        return true;
    }
    if status.last_attempted_values_checksum != observed.values_checksum {
        debug!("Upgrade due: values checksum changed");
        return true;
    }
    if status.failures > 0 && (max_retries < 0 || status.failures < max_retries) {
        debug!(
            "Upgrade due: retrying after {} failure(s) (max retries: {})",
            status.failures, max_retries
        );
        return true;
    }
    false
}

/// Whether Helm tests need to run
///
/// Tests run when enabled and the last install or upgrade succeeded.
pub fn should_test(status: &HelmReleaseStatus, test_enabled: bool) -> bool {
    if !test_enabled {
        return false;
    }
    status.conditions.iter().any(|c| {
        c.status == ConditionStatus::True
            && matches!(c.r#type, ConditionType::Installed | ConditionType::Upgraded)
    })
}

/// Whether a rollback needs to be performed
///
/// A rollback is due when enabled, the failed upgrade produced a release revision newer
/// than `release_revision`, and the Upgraded condition is False.
pub fn should_rollback(
    status: &HelmReleaseStatus,
    rollback_enabled: bool,
    release_revision: i64,
) -> bool {
    if !rollback_enabled {
        return false;
    }
    if status.last_release_revision <= release_revision {
        return false;
    }
    let due = status.conditions.has_status(ConditionType::Upgraded, ConditionStatus::False);
    if due {
        debug!(
            "Rollback due: failed upgrade produced release revision {} (current {})",
            status.last_release_revision, release_revision
        );
    }
    due
}

/// Whether the release needs to be uninstalled
///
/// An uninstall is due when a release exists and the Installed condition is False.
pub fn should_uninstall(status: &HelmReleaseStatus, release_revision: i64) -> bool {
    if release_revision <= 0 {
        return false;
    }
    let due = status.conditions.has_status(ConditionType::Installed, ConditionStatus::False);
    if due {
        debug!(
            "Uninstall due: install failed for release revision {}",
            release_revision
        );
    }
    due
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_test_disabled() {
        let mut status = HelmReleaseStatus::default();
        status.conditions.upsert(ConditionType::Installed, ConditionStatus::True, "r", "m");
        assert!(!should_test(&status, false));
    }

    #[test]
    fn test_should_rollback_disabled() {
        let mut status = HelmReleaseStatus {
            last_release_revision: 4,
            ..Default::default()
        };
        status.conditions.upsert(ConditionType::Upgraded, ConditionStatus::False, "r", "m");
        assert!(!should_rollback(&status, false, 3));
        assert!(should_rollback(&status, true, 3));
    }
}
