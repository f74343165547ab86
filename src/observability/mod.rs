//! # Observability
//!
//! Structured logging setup and Prometheus metrics.

pub mod metrics;

/// Install the global tracing subscriber
///
/// Honors `RUST_LOG`, defaulting to `helm_release_controller=info`. Logs go to stderr
/// so binaries can keep stdout for their output.
pub fn init_tracing() {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "helm_release_controller=info".into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
    {
        // Another subscriber was installed first, e.g. by the embedding driver
        eprintln!("Tracing subscriber already initialized: {e}");
    }
}
