//! # Constants
//!
//! Defaults, annotation keys and well-known condition reasons.

/// Default timeout for any individual Kubernetes operation during a Helm action (seconds)
pub const DEFAULT_RELEASE_TIMEOUT_SECS: u64 = 300;

/// Default number of revisions Helm keeps for a release
pub const DEFAULT_MAX_HISTORY: i32 = 10;

/// Default number of upgrade retries after a failure (negative means unlimited)
pub const DEFAULT_UPGRADE_MAX_RETRIES: i64 = 0;

/// Chart version used when the chart template does not pin one
pub const DEFAULT_CHART_VERSION: &str = "*";

/// Key looked up in a referenced ConfigMap or Secret when `valuesKey` is omitted
pub const DEFAULT_VALUES_KEY: &str = "values.yaml";

/// Finalizer set on HelmRelease resources by the controller
pub const HELM_RELEASE_FINALIZER: &str = "finalizers.fluxcd.io";

/// Key used for indexing HelmReleases based on their sources
pub const SOURCE_INDEX_KEY: &str = ".metadata.source";

/// Message of the Ready condition while a reconciliation is running
pub const PROGRESSING_MESSAGE: &str = "reconciliation in progress";

/// Well-known condition reasons
pub mod reason {
    pub const PROGRESSING: &str = "Progressing";
    pub const RECONCILIATION_SUCCEEDED: &str = "ReconciliationSucceeded";
    pub const RECONCILIATION_FAILED: &str = "ReconciliationFailed";
    pub const INSTALL_SUCCEEDED: &str = "InstallSucceeded";
    pub const INSTALL_FAILED: &str = "InstallFailed";
    pub const UPGRADE_SUCCEEDED: &str = "UpgradeSucceeded";
    pub const UPGRADE_FAILED: &str = "UpgradeFailed";
    pub const TEST_SUCCEEDED: &str = "TestSucceeded";
    pub const TEST_FAILED: &str = "TestFailed";
    pub const ROLLBACK_SUCCEEDED: &str = "RollbackSucceeded";
    pub const ROLLBACK_FAILED: &str = "RollbackFailed";
    pub const UNINSTALL_SUCCEEDED: &str = "UninstallSucceeded";
    pub const UNINSTALL_FAILED: &str = "UninstallFailed";
    pub const ARTIFACT_FAILED: &str = "ArtifactFailed";
    pub const DEPENDENCY_NOT_READY: &str = "DependencyNotReady";
    pub const SUSPENDED: &str = "Suspended";
}
