use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing output for CLI usage.
///
/// Events go to stderr so the confirmation line on stdout stays clean.
/// Defaults to `info` when RUST_LOG is not set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init so a second call (e.g. from tests) is harmless
    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
