//! # Custom Resource Definitions
//!
//! CRD types for the Helm Release Controller.
//!
//! This module contains the `HelmRelease` custom resource, its action configuration
//! blocks, the status it reports and the conditions kept on that status.

mod actions;
mod condition;
mod status;

pub use actions::{Install, Rollback, Test, Uninstall, Upgrade};
pub use condition::{Condition, ConditionStatus, ConditionType, Conditions};
pub use status::{HelmReleaseStatus, NamespacedName};

use crate::error::ReleaseError;
use kube::CustomResource;
use schemars::{Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// HelmRelease Custom Resource Definition
///
/// Declares a Helm chart to be released into a target namespace, and how each
/// Helm action (install, upgrade, test, rollback, uninstall) should behave.
///
/// # Example
///
/// ```yaml
/// apiVersion: helm.toolkit.fluxcd.io/v2alpha1
/// kind: HelmRelease
/// metadata:
///   name: podinfo
///   namespace: default
/// spec:
///   interval: 5m
///   chart:
///     name: podinfo
///     version: ">=4.0.0"
///     sourceRef:
///       kind: HelmRepository
///       name: podinfo
///       namespace: flux-system
///   upgrade:
///     maxRetries: 3
///   rollback:
///     enable: true
///   values:
///     replicaCount: 2
/// ```
#[derive(CustomResource, Debug, Clone, Deserialize, Serialize, schemars::JsonSchema)]
#[kube(
    kind = "HelmRelease",
    group = "helm.toolkit.fluxcd.io",
    version = "v2alpha1",
    namespaced,
    status = "HelmReleaseStatus",
    shortname = "hr",
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}, {"name":"Status", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].message"}, {"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct HelmReleaseSpec {
    /// Helm chart name, version and source
    pub chart: HelmChartTemplate,
    /// Interval at which to reconcile the release
    /// Format: Kubernetes duration string (e.g., "1m", "5m0s", "1h")
    pub interval: String,
    /// Suspend reconciliation of this release
    /// Does not apply to reconciliations that already started
    #[serde(default)]
    pub suspend: bool,
    /// Name of the Helm release
    /// Defaults to '[TargetNamespace-]Name'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_name: Option<String>,
    /// Namespace to target when performing Helm actions
    /// Defaults to the namespace of the HelmRelease
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_namespace: Option<String>,
    /// HelmReleases that must be ready before this one is reconciled
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    /// Time to wait for any individual Kubernetes operation during a Helm action
    /// Default: "5m0s"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    /// Number of revisions kept by Helm
    /// Use 0 for unlimited; defaults to 10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_history: Option<i32>,
    /// Helm install configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install: Option<Install>,
    /// Helm upgrade configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade: Option<Upgrade>,
    /// Helm test configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<Test>,
    /// Helm rollback configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollback: Option<Rollback>,
    /// Helm uninstall configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uninstall: Option<Uninstall>,
    /// References to resources containing values, merged in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values_from: Vec<ValuesReference>,
    /// Values for the release
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "preserve_unknown_fields")]
    pub values: Option<Value>,
}

/// Template for the HelmChart object the controller generates for a release
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HelmChartTemplate {
    /// Name of the chart in the referenced repository
    pub name: String,
    /// Semver expression; latest when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Source the chart is available at
    pub source_ref: CrossNamespaceObjectReference,
    /// Interval at which to check the repository for chart updates
    /// Defaults to the release interval
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

/// Reference to an object in any namespace
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrossNamespaceObjectReference {
    /// API version of the referent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// Kind of the referent (e.g. HelmRepository)
    pub kind: String,
    /// Name of the referent
    pub name: String,
    /// Namespace of the referent; defaults to the HelmRelease namespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Reference to a ConfigMap or Secret holding release values
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValuesReference {
    /// Kind of the referent
    pub kind: ValuesSourceKind,
    /// Name of the referent, in the HelmRelease namespace
    pub name: String,
    /// Data key holding the values; defaults to "values.yaml"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values_key: Option<String>,
    /// Path at which the referenced value is merged, instead of merging the whole document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_path: Option<String>,
    /// Do not fail when the referent or key is missing
    #[serde(default)]
    pub optional: bool,
}

impl ValuesReference {
    pub fn values_key(&self) -> &str {
        self.values_key
            .as_deref()
            .unwrap_or(crate::constants::DEFAULT_VALUES_KEY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
pub enum ValuesSourceKind {
    ConfigMap,
    Secret,
}

/// Annotations the controller reads from HelmRelease resources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseAnnotation {
    /// Requests a reconciliation outside of the defined schedule
    ReconcileAt,
}

impl ReleaseAnnotation {
    pub fn key(&self) -> &'static str {
        match self {
            ReleaseAnnotation::ReconcileAt => "fluxcd.io/reconcileAt",
        }
    }
}

impl HelmRelease {
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    pub fn namespace(&self) -> &str {
        self.metadata.namespace.as_deref().unwrap_or_default()
    }

    /// Generation of the resource, 0 when not yet assigned by the API server
    pub fn generation(&self) -> i64 {
        self.metadata.generation.unwrap_or(0)
    }

    /// Configured release name, or '[TargetNamespace-]Name'
    pub fn release_name(&self) -> String {
        if let Some(release_name) = non_empty(self.spec.release_name.as_deref()) {
            return release_name.to_string();
        }
        match non_empty(self.spec.target_namespace.as_deref()) {
            Some(target_namespace) => format!("{}-{}", target_namespace, self.name()),
            None => self.name().to_string(),
        }
    }

    /// Configured target namespace, or the namespace of the HelmRelease
    pub fn release_namespace(&self) -> String {
        non_empty(self.spec.target_namespace.as_deref())
            .unwrap_or(self.namespace())
            .to_string()
    }

    /// Name used for the HelmChart created for this release
    pub fn helm_chart_name(&self) -> String {
        format!("{}-{}", self.namespace(), self.name())
    }

    /// Values of the release as a JSON object
    ///
    /// Absent values yield an empty object.
    pub fn values(&self) -> Result<Map<String, Value>, ReleaseError> {
        match &self.spec.values {
            None | Some(Value::Null) => Ok(Map::new()),
            Some(Value::Object(values)) => Ok(values.clone()),
            Some(Value::Array(_)) => Err(ReleaseError::ValuesNotAnObject("an array")),
            Some(Value::String(_)) => Err(ReleaseError::ValuesNotAnObject("a string")),
            Some(Value::Number(_)) => Err(ReleaseError::ValuesNotAnObject("a number")),
            Some(Value::Bool(_)) => Err(ReleaseError::ValuesNotAnObject("a boolean")),
        }
    }

    pub fn annotation(&self, annotation: ReleaseAnnotation) -> Option<&str> {
        self.metadata
            .annotations
            .as_ref()
            .and_then(|ann| ann.get(annotation.key()))
            .map(String::as_str)
    }

    /// Value of the reconcile-at annotation, if a manual reconciliation was requested
    pub fn reconcile_requested_at(&self) -> Option<&str> {
        self.annotation(ReleaseAnnotation::ReconcileAt)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn preserve_unknown_fields(_gen: &mut SchemaGenerator) -> Schema {
    // Free-form values need a structural schema that keeps unknown fields
    schemars::json_schema!({
        "type": "object",
        "x-kubernetes-preserve-unknown-fields": true,
        "nullable": true,
        "description": "Values for the release"
    })
}
