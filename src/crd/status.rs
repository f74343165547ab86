//! # HelmRelease Status
//!
//! Status types for tracking reconciliation attempts, applied revisions and failures.

use crate::crd::condition::Conditions;
use crate::error::ReleaseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Observed state of a HelmRelease
///
/// Zero values are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HelmReleaseStatus {
    /// Last reconciled generation
    #[serde(default, skip_serializing_if = "is_zero")]
    pub observed_generation: i64,
    /// Conditions holds the conditions for the HelmRelease
    #[serde(default, skip_serializing_if = "Conditions::is_empty")]
    pub conditions: Conditions,
    /// Revision of the last successfully applied source
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_applied_revision: String,
    /// Revision of the last reconciliation attempt
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_attempted_revision: String,
    /// Checksum of the values of the last reconciliation attempt
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last_attempted_values_checksum: String,
    /// Revision of the last Helm release seen by the controller
    #[serde(default, skip_serializing_if = "is_zero")]
    pub last_release_revision: i64,
    /// Namespaced name (`<namespace>/<name>`) of the HelmChart created for this release
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub helm_chart: String,
    /// Consecutive reconciliation failures, reset after a successful reconciliation
    #[serde(default, skip_serializing_if = "is_zero")]
    pub failures: i64,
}

impl HelmReleaseStatus {
    /// Parse the HelmChart reference into its namespace and name
    ///
    /// An empty reference yields an empty [`NamespacedName`].
    pub fn helm_chart_ref(&self) -> Result<NamespacedName, ReleaseError> {
        self.helm_chart.parse()
    }

    pub fn set_helm_chart(&mut self, chart: &NamespacedName) {
        self.helm_chart = chart.to_string();
    }
}

/// Namespace and name pair of a Kubernetes object
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NamespacedName {
    pub namespace: String,
    pub name: String,
}

impl NamespacedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.namespace.is_empty() && self.name.is_empty()
    }
}

impl fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

impl std::str::FromStr for NamespacedName {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(NamespacedName::default());
        }
        match s.split_once('/') {
            Some((namespace, name)) if !name.contains('/') => {
                Ok(NamespacedName::new(namespace, name))
            }
            _ => Err(ReleaseError::InvalidChartReference(s.to_string())),
        }
    }
}

#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde skip_serializing_if passes a reference"
)]
fn is_zero(value: &i64) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helm_chart_ref_empty() {
        let status = HelmReleaseStatus::default();
        let chart = status.helm_chart_ref().unwrap();
        assert_eq!(chart, NamespacedName::default());
        assert!(chart.is_empty());
    }

    #[test]
    fn test_helm_chart_ref_split() {
        let status = HelmReleaseStatus {
            helm_chart: "flux-system/default-podinfo".to_string(),
            ..Default::default()
        };
        let chart = status.helm_chart_ref().unwrap();
        assert_eq!(chart.namespace, "flux-system");
        assert_eq!(chart.name, "default-podinfo");
    }

    #[test]
    fn test_helm_chart_ref_without_separator_fails() {
        let status = HelmReleaseStatus {
            helm_chart: "podinfo".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            status.helm_chart_ref(),
            Err(ReleaseError::InvalidChartReference(ref s)) if s == "podinfo"
        ));
    }

    #[test]
    fn test_helm_chart_ref_with_extra_separator_fails() {
        let status = HelmReleaseStatus {
            helm_chart: "a/b/c".to_string(),
            ..Default::default()
        };
        assert!(status.helm_chart_ref().is_err());
    }

    #[test]
    fn test_set_helm_chart_round_trips() {
        let mut status = HelmReleaseStatus::default();
        status.set_helm_chart(&NamespacedName::new("flux-system", "default-podinfo"));
        assert_eq!(status.helm_chart, "flux-system/default-podinfo");
    }

    #[test]
    fn test_empty_status_serializes_to_empty_object() {
        let json = serde_json::to_value(HelmReleaseStatus::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_status_deserializes_camel_case() {
        let status: HelmReleaseStatus = serde_json::from_value(serde_json::json!({
            "observedGeneration": 3,
            "lastAttemptedRevision": "1.0.0",
            "lastReleaseRevision": 2,
            "failures": 1,
            "conditions": [{
                "type": "Upgraded",
                "status": "False",
                "reason": "UpgradeFailed",
                "message": "timed out",
                "lastTransitionTime": "2024-01-01T00:00:00Z"
            }]
        }))
        .unwrap();

        assert_eq!(status.observed_generation, 3);
        assert_eq!(status.last_attempted_revision, "1.0.0");
        assert_eq!(status.last_release_revision, 2);
        assert_eq!(status.failures, 1);
        assert_eq!(status.conditions.len(), 1);
    }
}
