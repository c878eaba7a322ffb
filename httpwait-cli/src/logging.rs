use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "HTTPWAIT_LOG";

/// Diagnostics go to stderr so they never mix with workflow commands on stdout.
pub fn init() {
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
