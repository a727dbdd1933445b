//! Diagnostic logging setup.
//!
//! Events go to stdout and, when a directory is given, to `layerpin.log`
//! inside it. Release builds run without a console, so the file is the only
//! place their warnings end up.

use std::path::Path;

use tracing::{warn, Subscriber};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Name of the log file written next to the config file.
pub const LOG_FILE_NAME: &str = "layerpin.log";

/// Flushes the log file when dropped. Keep it alive until exit.
#[allow(dead_code)]
pub struct LogGuard(WorkerGuard);

/// Initialise logging.
///
/// Without `debug` the level is pinned to `info`, ignoring `RUST_LOG`, so a
/// stray environment variable cannot make a tray app chatty. With `debug`
/// enabled (config `debug_logging`), `RUST_LOG` may override the default
/// `debug` level.
pub fn init(debug: bool, log_dir: Option<&Path>) -> Option<LogGuard> {
    let (writer, guard, problem) = match log_dir.map(open_log_file) {
        Some(Ok((writer, guard))) => (Some(writer), Some(LogGuard(guard)), None),
        Some(Err(e)) => (None, None, Some(e)),
        None => (None, None, None),
    };

    let _ = subscriber(debug, writer).try_init();

    if let Some(e) = problem {
        warn!("log file unavailable, logging to stdout only: {e}");
    }
    guard
}

fn filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    }
}

fn open_log_file(dir: &Path) -> Result<(NonBlocking, WorkerGuard), InitError> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("layerpin")
        .filename_suffix("log")
        .build(dir)?;
    Ok(tracing_appender::non_blocking(appender))
}

fn subscriber(debug: bool, file: Option<NonBlocking>) -> impl Subscriber + Send + Sync {
    // File log: plain formatting, no ANSI codes
    let file_layer = file.map(|writer| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter(debug))
        .with(fmt::layer().with_target(false))
        .with(file_layer)
}
