//! # Controller
//!
//! Reconciliation logic for HelmRelease resources.

pub mod reconciler;
