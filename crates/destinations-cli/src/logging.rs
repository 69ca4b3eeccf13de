//! Diagnostic logging setup.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber. The filter comes from flags only:
/// `warn` by default, `debug` for this workspace's crates with `--verbose`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,destinations=debug,destinations_cli=debug")
    } else {
        EnvFilter::new("warn")
    };

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
