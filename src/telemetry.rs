use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// Output goes to stderr: stdout carries the CGI response. The filter comes
/// from `RUST_LOG` and defaults to `warn`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
