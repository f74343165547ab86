//! # Helm Release Controller
//!
//! API types and reconciliation decision logic for `HelmRelease` resources.
//!
//! ## Overview
//!
//! A reconciliation driver watches `HelmRelease` resources and, on every cycle:
//!
//! 1. **Resolves settings** - Turns the optional spec fields into a fully defaulted [`config::ReleaseSettings`]
//! 2. **Resets conditions** - Marks the release as progressing
//! 3. **Decides** - Asks the decision engine whether an upgrade, test, rollback or uninstall is due
//! 4. **Records** - Writes the outcome of the attempt back into the [`HelmReleaseStatus`]
//!
//! Running the Helm actions, talking to the cluster and persisting the status are left to the driver.

pub mod config;
pub mod constants;
pub mod controller;
pub mod crd;
pub mod error;
pub mod observability;

// Re-export CRD types for convenience
pub use crd::*;
pub use error::ReleaseError;
