//! # CRD Generator
//!
//! Prints the HelmRelease CustomResourceDefinition as YAML.
//!
//! ```bash
//! cargo run --bin crdgen > config/crd/helmrelease.yaml
//! ```

use anyhow::{Context, Result};
use helm_release_controller::observability;
use helm_release_controller::HelmRelease;
use kube::core::CustomResourceExt;
use tracing::info;

fn main() -> Result<()> {
    observability::init_tracing();

    let crd = HelmRelease::crd();
    let yaml = serde_yaml::to_string(&crd).context("Failed to serialize HelmRelease CRD")?;
    info!(
        "Generated CRD {}",
        crd.metadata.name.as_deref().unwrap_or("unknown")
    );
    print!("{yaml}");
    Ok(())
}
