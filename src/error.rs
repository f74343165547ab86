//! # Release Errors
//!
//! Errors raised while reading a HelmRelease: malformed durations, chart references and values.
//!
//! Reconciliation failures are not errors here. They are recorded on the status
//! by the readiness recorder.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    /// A duration field does not follow the Kubernetes duration format
    #[error("invalid duration '{value}' for {field}: {reason}")]
    InvalidDuration {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The status chart reference is not of the form `<namespace>/<name>`
    #[error("invalid chart reference '{0}': expected <namespace>/<name>")]
    InvalidChartReference(String),

    /// The `values` blob is not a JSON object
    #[error("release values must be an object, got {0}")]
    ValuesNotAnObject(&'static str),

    /// The values could not be encoded for checksumming
    #[error("failed to encode release values: {0}")]
    ValuesEncoding(#[from] serde_json::Error),
}
