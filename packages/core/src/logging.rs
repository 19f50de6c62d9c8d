use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize structured logging for the monitor.
///
/// This must be called once at startup (in main.rs). `RUST_LOG` overrides
/// the default `info` filter; use `debug` to see every evaluation.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("Logging initialized");
}
