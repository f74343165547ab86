//! # Helm Action Configuration
//!
//! Per-action settings for install, upgrade, test, rollback and uninstall.
//!
//! Timeouts are Kubernetes duration strings. When omitted they default to the
//! release timeout during settings resolution.

use serde::{Deserialize, Serialize};

/// Configuration for Helm install actions
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Install {
    /// Time to wait for any individual Kubernetes operation during the install
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    /// Do not wait for resources to be ready after the install
    #[serde(default)]
    pub disable_wait: bool,
    /// Prevent hooks from running during the install
    #[serde(default)]
    pub disable_hooks: bool,
    /// Do not validate rendered templates against the Kubernetes OpenAPI schema
    #[serde(default, rename = "disableOpenAPIValidation")]
    pub disable_openapi_validation: bool,
    /// Re-use the release name, but only if it belongs to a deleted release still in history
    #[serde(default)]
    pub replace: bool,
    /// Do not install CRDs shipped with the chart
    #[serde(default, rename = "skipCRDs")]
    pub skip_crds: bool,
}

/// Configuration for Helm upgrade actions
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Upgrade {
    /// Time to wait for any individual Kubernetes operation during the upgrade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    /// Number of retries after a failure before giving up
    /// Defaults to 0; a negative value means unlimited retries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<i64>,
    /// Do not wait for resources to be ready after the upgrade
    #[serde(default)]
    pub disable_wait: bool,
    /// Prevent hooks from running during the upgrade
    #[serde(default)]
    pub disable_hooks: bool,
    /// Do not validate rendered templates against the Kubernetes OpenAPI schema
    #[serde(default, rename = "disableOpenAPIValidation")]
    pub disable_openapi_validation: bool,
    /// Force resource updates through a replacement strategy
    #[serde(default)]
    pub force: bool,
    /// Reuse the values of the last release and merge in overrides
    #[serde(default)]
    pub preserve_values: bool,
    /// Delete new resources created during a failed upgrade
    #[serde(default)]
    pub cleanup_on_fail: bool,
}

/// Configuration for Helm test actions
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    /// Run Helm tests after a successful install or upgrade
    #[serde(default)]
    pub enable: bool,
    /// Time to wait for any individual Kubernetes operation during the tests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

/// Configuration for Helm rollback actions
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rollback {
    /// Roll back after a failed upgrade
    #[serde(default)]
    pub enable: bool,
    /// Time to wait for any individual Kubernetes operation during the rollback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    /// Do not wait for resources to be ready after the rollback
    #[serde(default)]
    pub disable_wait: bool,
    /// Prevent hooks from running during the rollback
    #[serde(default)]
    pub disable_hooks: bool,
    /// Restart pods for the resource if applicable
    #[serde(default)]
    pub recreate: bool,
    /// Force resource updates through a replacement strategy
    #[serde(default)]
    pub force: bool,
    /// Delete new resources created during a failed rollback
    #[serde(default)]
    pub cleanup_on_fail: bool,
}

/// Configuration for Helm uninstall actions
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Uninstall {
    /// Time to wait for any individual Kubernetes operation during the uninstall
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    /// Prevent hooks from running during the uninstall
    #[serde(default)]
    pub disable_hooks: bool,
    /// Remove all resources but keep the release history
    #[serde(default)]
    pub keep_history: bool,
}
