//! # Conditions
//!
//! Typed status conditions and the per-type condition store kept on the release status.

use crate::constants::{reason, PROGRESSING_MESSAGE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Condition types a HelmRelease can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, schemars::JsonSchema)]
pub enum ConditionType {
    /// Aggregate outcome of the last reconciliation
    Ready,
    /// Outcome of the last Helm install action
    Installed,
    /// Outcome of the last Helm upgrade action
    Upgraded,
    /// Outcome of the last Helm test action
    Tested,
    /// Outcome of the last Helm rollback action
    RolledBack,
    /// Outcome of the last Helm uninstall action
    Uninstalled,
}

impl ConditionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionType::Ready => "Ready",
            ConditionType::Installed => "Installed",
            ConditionType::Upgraded => "Upgraded",
            ConditionType::Tested => "Tested",
            ConditionType::RolledBack => "RolledBack",
            ConditionType::Uninstalled => "Uninstalled",
        }
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a condition (True, False, Unknown)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

impl ConditionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionStatus::True => "True",
            ConditionStatus::False => "False",
            ConditionStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Condition represents an observation of one aspect of the release
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Type of condition
    pub r#type: ConditionType,
    /// Status of the condition
    pub status: ConditionStatus,
    /// Machine-readable reason for the last transition
    #[serde(default)]
    pub reason: String,
    /// Human-readable message for the last transition
    #[serde(default)]
    pub message: String,
    /// Last transition time (RFC3339)
    #[serde(default)]
    pub last_transition_time: String,
}

impl Condition {
    /// Create a condition stamped with the current time
    pub fn new(
        condition_type: ConditionType,
        status: ConditionStatus,
        reason: &str,
        message: &str,
    ) -> Self {
        Self {
            r#type: condition_type,
            status,
            reason: reason.to_string(),
            message: message.to_string(),
            last_transition_time: now_rfc3339(),
        }
    }
}

/// Ordered set of conditions holding at most one entry per [`ConditionType`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, schemars::JsonSchema)]
#[serde(transparent)]
pub struct Conditions(Vec<Condition>);

impl<'de> Deserialize<'de> for Conditions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<Condition>::deserialize(deserializer).map(Conditions::from)
    }
}

impl Conditions {
    /// Set the condition of the given type, replacing any existing entry of that type
    ///
    /// The new entry is appended, so the most recently set condition is always last.
    pub fn upsert(
        &mut self,
        condition_type: ConditionType,
        status: ConditionStatus,
        reason: &str,
        message: &str,
    ) {
        self.0.retain(|c| c.r#type != condition_type);
        self.0.push(Condition::new(condition_type, status, reason, message));
    }

    /// Replace all conditions with a single Ready/Unknown "progressing" condition
    ///
    /// Per-action conditions of earlier cycles are dropped until they are recorded again.
    pub fn reset_progressing(&mut self) {
        self.0 = vec![Condition::new(
            ConditionType::Ready,
            ConditionStatus::Unknown,
            reason::PROGRESSING,
            PROGRESSING_MESSAGE,
        )];
    }

    pub fn get(&self, condition_type: ConditionType) -> Option<&Condition> {
        self.0.iter().find(|c| c.r#type == condition_type)
    }

    /// Whether a condition of the given type currently has the given status
    pub fn has_status(&self, condition_type: ConditionType, status: ConditionStatus) -> bool {
        self.get(condition_type).is_some_and(|c| c.status == status)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Condition> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Condition>> for Conditions {
    /// Build a store from raw conditions, keeping the last entry of each type
    fn from(conditions: Vec<Condition>) -> Self {
        let mut store = Conditions::default();
        for condition in conditions {
            store.0.retain(|c| c.r#type != condition.r#type);
            store.0.push(condition);
        }
        store
    }
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_adds_condition() {
        let mut conditions = Conditions::default();
        conditions.upsert(
            ConditionType::Installed,
            ConditionStatus::True,
            reason::INSTALL_SUCCEEDED,
            "installed",
        );

        assert_eq!(conditions.len(), 1);
        let installed = conditions.get(ConditionType::Installed).unwrap();
        assert_eq!(installed.status, ConditionStatus::True);
        assert_eq!(installed.reason, "InstallSucceeded");
        assert_eq!(installed.message, "installed");
        assert!(!installed.last_transition_time.is_empty());
    }

    #[test]
    fn test_upsert_same_condition_twice_keeps_one_entry() {
        let mut conditions = Conditions::default();
        for _ in 0..2 {
            conditions.upsert(
                ConditionType::Ready,
                ConditionStatus::True,
                reason::RECONCILIATION_SUCCEEDED,
                "done",
            );
        }

        assert_eq!(conditions.len(), 1);
        assert!(conditions.has_status(ConditionType::Ready, ConditionStatus::True));
    }

    #[test]
    fn test_upsert_replaces_and_moves_to_end() {
        let mut conditions = Conditions::default();
        conditions.upsert(ConditionType::Ready, ConditionStatus::Unknown, "a", "a");
        conditions.upsert(ConditionType::Upgraded, ConditionStatus::True, "b", "b");
        conditions.upsert(ConditionType::Ready, ConditionStatus::False, "c", "c");

        let types: Vec<ConditionType> = conditions.iter().map(|c| c.r#type).collect();
        assert_eq!(types, vec![ConditionType::Upgraded, ConditionType::Ready]);
        assert!(conditions.has_status(ConditionType::Ready, ConditionStatus::False));
    }

    #[test]
    fn test_reset_progressing_drops_action_conditions() {
        let mut conditions = Conditions::default();
        conditions.upsert(ConditionType::Installed, ConditionStatus::False, "x", "x");
        conditions.upsert(ConditionType::Upgraded, ConditionStatus::True, "y", "y");

        conditions.reset_progressing();

        assert_eq!(conditions.len(), 1);
        let ready = conditions.get(ConditionType::Ready).unwrap();
        assert_eq!(ready.status, ConditionStatus::Unknown);
        assert_eq!(ready.reason, reason::PROGRESSING);
        assert_eq!(ready.message, "reconciliation in progress");
        assert!(conditions.get(ConditionType::Installed).is_none());
    }

    #[test]
    fn test_has_status_missing_condition() {
        let conditions = Conditions::default();
        assert!(!conditions.has_status(ConditionType::Installed, ConditionStatus::False));
    }

    #[test]
    fn test_from_vec_deduplicates_by_type() {
        let conditions = Conditions::from(vec![
            Condition::new(ConditionType::Installed, ConditionStatus::False, "a", "a"),
            Condition::new(ConditionType::Installed, ConditionStatus::True, "b", "b"),
        ]);

        assert_eq!(conditions.len(), 1);
        assert!(conditions.has_status(ConditionType::Installed, ConditionStatus::True));
    }

    #[test]
    fn test_deserialize_keeps_last_duplicate() {
        let conditions: Conditions = serde_json::from_value(serde_json::json!([
            {"type": "Ready", "status": "False"},
            {"type": "Ready", "status": "True"}
        ]))
        .unwrap();

        assert_eq!(conditions.len(), 1);
        assert!(conditions.has_status(ConditionType::Ready, ConditionStatus::True));
    }

    #[test]
    fn test_condition_serializes_in_kubernetes_shape() {
        let condition = Condition::new(ConditionType::Ready, ConditionStatus::True, "r", "m");
        let json = serde_json::to_value(&condition).unwrap();

        assert_eq!(json["type"], "Ready");
        assert_eq!(json["status"], "True");
        assert_eq!(json["reason"], "r");
        assert_eq!(json["message"], "m");
        assert!(json["lastTransitionTime"].is_string());
    }
}
