//! # Release Settings
//!
//! Resolves the optional fields of a [`HelmRelease`] into fully defaulted settings.
//!
//! Defaults cascade from the parent scope: action timeouts fall back to the release
//! timeout, which falls back to the controller default (300s). The chart interval falls
//! back to the release interval, and the chart namespace to the HelmRelease namespace.

use crate::config::controller::ControllerConfig;
use crate::config::duration::parse_kubernetes_duration;
use crate::constants::DEFAULT_CHART_VERSION;
use crate::crd::HelmRelease;
use crate::error::ReleaseError;
use std::time::Duration;
use tracing::debug;

/// Fully resolved settings for one reconciliation of a HelmRelease
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSettings {
    pub release_name: String,
    pub release_namespace: String,
    pub interval: Duration,
    pub timeout: Duration,
    /// Number of revisions kept by Helm, 0 means unlimited
    pub max_history: i32,
    pub suspend: bool,
    pub depends_on: Vec<String>,
    pub chart: ChartSettings,
    pub install: InstallSettings,
    pub upgrade: UpgradeSettings,
    pub test: TestSettings,
    pub rollback: RollbackSettings,
    pub uninstall: UninstallSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSettings {
    /// Name of the HelmChart object generated for the release
    pub helm_chart_name: String,
    /// Namespace of the chart source, where the HelmChart is created
    pub namespace: String,
    pub chart: String,
    pub version: String,
    pub interval: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSettings {
    pub timeout: Duration,
    pub disable_wait: bool,
    pub disable_hooks: bool,
    pub disable_openapi_validation: bool,
    pub replace: bool,
    pub skip_crds: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeSettings {
    pub timeout: Duration,
    /// Retries after a failed attempt; negative means unlimited
    pub max_retries: i64,
    pub disable_wait: bool,
    pub disable_hooks: bool,
    pub disable_openapi_validation: bool,
    pub force: bool,
    pub preserve_values: bool,
    pub cleanup_on_fail: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSettings {
    pub enabled: bool,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollbackSettings {
    pub enabled: bool,
    pub timeout: Duration,
    pub disable_wait: bool,
    pub disable_hooks: bool,
    pub recreate: bool,
    pub force: bool,
    pub cleanup_on_fail: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallSettings {
    pub timeout: Duration,
    pub disable_hooks: bool,
    pub keep_history: bool,
}

impl ReleaseSettings {
    /// Resolve the settings of a HelmRelease against the controller defaults
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::InvalidDuration`] when any interval or timeout is malformed.
    pub fn resolve(hr: &HelmRelease, config: &ControllerConfig) -> Result<Self, ReleaseError> {
        let spec = &hr.spec;

        let interval = parse_kubernetes_duration("spec.interval", &spec.interval)?;
        let timeout = resolve_timeout(
            "spec.timeout",
            spec.timeout.as_deref(),
            config.default_timeout(),
        )?;

        let chart = ChartSettings {
            helm_chart_name: hr.helm_chart_name(),
            namespace: spec
                .chart
                .source_ref
                .namespace
                .as_deref()
                .filter(|ns| !ns.is_empty())
                .unwrap_or(hr.namespace())
                .to_string(),
            chart: spec.chart.name.clone(),
            version: spec
                .chart
                .version
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or(DEFAULT_CHART_VERSION)
                .to_string(),
            interval: resolve_timeout(
                "spec.chart.interval",
                spec.chart.interval.as_deref(),
                interval,
            )?,
        };

        let install = spec.install.clone().unwrap_or_default();
        let upgrade = spec.upgrade.clone().unwrap_or_default();
        let test = spec.test.clone().unwrap_or_default();
        let rollback = spec.rollback.clone().unwrap_or_default();
        let uninstall = spec.uninstall.clone().unwrap_or_default();

        let settings = Self {
            release_name: hr.release_name(),
            release_namespace: hr.release_namespace(),
            interval,
            timeout,
            max_history: spec.max_history.unwrap_or(config.default_max_history),
            suspend: spec.suspend,
            depends_on: spec.depends_on.clone(),
            chart,
            install: InstallSettings {
                timeout: resolve_timeout(
                    "spec.install.timeout",
                    install.timeout.as_deref(),
                    timeout,
                )?,
                disable_wait: install.disable_wait,
                disable_hooks: install.disable_hooks,
                disable_openapi_validation: install.disable_openapi_validation,
                replace: install.replace,
                skip_crds: install.skip_crds,
            },
            upgrade: UpgradeSettings {
                timeout: resolve_timeout(
                    "spec.upgrade.timeout",
                    upgrade.timeout.as_deref(),
                    timeout,
                )?,
                max_retries: upgrade.max_retries.unwrap_or(config.default_max_retries),
                disable_wait: upgrade.disable_wait,
                disable_hooks: upgrade.disable_hooks,
                disable_openapi_validation: upgrade.disable_openapi_validation,
                force: upgrade.force,
                preserve_values: upgrade.preserve_values,
                cleanup_on_fail: upgrade.cleanup_on_fail,
            },
            test: TestSettings {
                enabled: test.enable,
                timeout: resolve_timeout(
                    "spec.test.timeout",
                    test.timeout.as_deref(),
                    timeout,
                )?,
            },
            rollback: RollbackSettings {
                enabled: rollback.enable,
                timeout: resolve_timeout(
                    "spec.rollback.timeout",
                    rollback.timeout.as_deref(),
                    timeout,
                )?,
                disable_wait: rollback.disable_wait,
                disable_hooks: rollback.disable_hooks,
                recreate: rollback.recreate,
                force: rollback.force,
                cleanup_on_fail: rollback.cleanup_on_fail,
            },
            uninstall: UninstallSettings {
                timeout: resolve_timeout(
                    "spec.uninstall.timeout",
                    uninstall.timeout.as_deref(),
                    timeout,
                )?,
                disable_hooks: uninstall.disable_hooks,
                keep_history: uninstall.keep_history,
            },
        };

        debug!(
            "Resolved settings for HelmRelease {}/{}: release={}/{}, timeout={:?}, max_retries={}",
            hr.namespace(),
            hr.name(),
            settings.release_namespace,
            settings.release_name,
            settings.timeout,
            settings.upgrade.max_retries
        );

        Ok(settings)
    }
}

/// Parse an optional duration, or fall back to the parent-scoped default
fn resolve_timeout(
    field: &'static str,
    value: Option<&str>,
    default: Duration,
) -> Result<Duration, ReleaseError> {
    match value {
        Some(value) => parse_kubernetes_duration(field, value),
        None => Ok(default),
    }
}
