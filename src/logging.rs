use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `DEMO_LOG=debug`.
pub const LOG_ENV: &str = "DEMO_LOG";

/// Installs a stderr `fmt` subscriber. Calling it again is a no-op.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
