use std::io;
use tracing::{subscriber::SetGlobalDefaultError, Level};
use tracing_subscriber::FmtSubscriber;

/// Maps the number of `-v` flags to a maximum log level.
pub(crate) fn level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber, writing to stderr so that reports on
/// stdout stay machine readable. Only call this once per process.
pub(crate) fn init_events(json: bool, verbosity: u8) -> Result<(), SetGlobalDefaultError> {
    let builder = FmtSubscriber::builder()
        .with_writer(io::stderr)
        .with_max_level(level(verbosity));
    // set the global default so that events from netaddr-core land here too
    if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    }
}
