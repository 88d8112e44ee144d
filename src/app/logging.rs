//! Diagnostic logging setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Log level for a `-v` count: warn, info, debug, then trace.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Only this crate's events are emitted.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::new(format!("outdir={}", level_for(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
