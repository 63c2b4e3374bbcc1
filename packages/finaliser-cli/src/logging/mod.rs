//! Logging
//!
//! User-facing messages of the CLI, filtered by level, and the `tracing`
//! subscriber that surfaces events from the finaliser library.

mod console_logger;
mod logger;

pub use console_logger::ConsoleLogger;
pub use logger::{LogLevel, Logger, NullLogger};

use tracing_subscriber::fmt::MakeWriter;

/// Plain-text subscriber admitting events at `level` and above
pub fn tracing_subscriber_for<W>(level: LogLevel, writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(level.tracing_level())
        .with_writer(writer)
        .with_target(false)
        .with_ansi(false)
        .finish()
}

/// Install the stderr subscriber for the process; a second call is a no-op
pub fn init_tracing(level: LogLevel) {
    let _ = tracing::subscriber::set_global_default(tracing_subscriber_for(level, std::io::stderr));
}
