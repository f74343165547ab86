//! # Controller Configuration
//!
//! Release defaults loaded from environment variables.

use crate::constants::{
    DEFAULT_MAX_HISTORY, DEFAULT_RELEASE_TIMEOUT_SECS, DEFAULT_UPGRADE_MAX_RETRIES,
};
use std::time::Duration;

/// Defaults applied to HelmReleases that leave a setting unset
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Release timeout used when `spec.timeout` is omitted (seconds)
    pub default_timeout_secs: u64,
    /// Helm history size used when `spec.maxHistory` is omitted
    pub default_max_history: i32,
    /// Upgrade retries used when `spec.upgrade.maxRetries` is omitted
    pub default_max_retries: i64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            default_timeout_secs: DEFAULT_RELEASE_TIMEOUT_SECS,
            default_max_history: DEFAULT_MAX_HISTORY,
            default_max_retries: DEFAULT_UPGRADE_MAX_RETRIES,
        }
    }
}

impl ControllerConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            default_timeout_secs: var_or_default(
                &lookup,
                "DEFAULT_RELEASE_TIMEOUT_SECS",
                DEFAULT_RELEASE_TIMEOUT_SECS,
            ),
            default_max_history: var_or_default(
                &lookup,
                "DEFAULT_MAX_HISTORY",
                DEFAULT_MAX_HISTORY,
            ),
            default_max_retries: var_or_default(
                &lookup,
                "DEFAULT_UPGRADE_MAX_RETRIES",
                DEFAULT_UPGRADE_MAX_RETRIES,
            ),
        }
    }

    pub fn default_timeout(&self) -> Duration {
        Duration::from_secs(self.default_timeout_secs)
    }
}

/// Read variable or return default value
fn var_or_default<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ControllerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, ControllerConfig::default());
        assert_eq!(config.default_timeout(), Duration::from_secs(300));
        assert_eq!(config.default_max_history, 10);
        assert_eq!(config.default_max_retries, 0);
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = ControllerConfig::from_lookup(lookup_from(&[
            ("DEFAULT_RELEASE_TIMEOUT_SECS", "600"),
            ("DEFAULT_MAX_HISTORY", "5"),
            ("DEFAULT_UPGRADE_MAX_RETRIES", "-1"),
        ]));
        assert_eq!(config.default_timeout_secs, 600);
        assert_eq!(config.default_max_history, 5);
        assert_eq!(config.default_max_retries, -1);
    }

    #[test]
    fn test_unparseable_value_falls_back() {
        let config =
            ControllerConfig::from_lookup(lookup_from(&[("DEFAULT_MAX_HISTORY", "ten")]));
        assert_eq!(config.default_max_history, 10);
    }
}
