//! Diagnostics output for the `meter` binary

use tracing_subscriber::EnvFilter;

/// Install the global subscriber on stderr
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Safe to call twice;
/// the second call is a no-op.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.with_ansi(false).try_init()
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "tracing already initialised");
    }
}
