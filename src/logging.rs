use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the tracing filter, e.g. `grndsys_version=debug`.
pub const LOG_ENV_VAR: &str = "GRNDSYS_LOG";

// Logs go to stderr so stdout only carries version output.
pub fn setup_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
