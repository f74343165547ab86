//! # Configuration
//!
//! Controller-wide defaults loaded from environment variables, and the per-cycle
//! resolution of a HelmRelease's optional settings into [`ReleaseSettings`].
//!
//! Resolution runs once at the start of a reconciliation so the decision engine
//! never has to deal with absent fields.

mod controller;
mod duration;
mod release;

pub use controller::ControllerConfig;
pub use duration::parse_kubernetes_duration;
pub use release::{
    ChartSettings, InstallSettings, ReleaseSettings, RollbackSettings, TestSettings,
    UninstallSettings, UpgradeSettings,
};

/// Load configuration from environment variables with defaults
pub fn load_config() -> ControllerConfig {
    ControllerConfig::from_env()
}
