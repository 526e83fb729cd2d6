/// Logging setup: human-readable lines on stdout plus an append-mode log
/// file without ANSI colours.
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install the global subscriber. If the log file cannot be opened the
/// process still logs to stdout.
pub fn init(log_file: &Path) {
    let stdout_layer = fmt::layer().with_target(false);

    match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => {
            let file_layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            let _ = tracing_subscriber::registry()
                .with(LevelFilter::INFO)
                .with(stdout_layer)
                .with(file_layer)
                .try_init();
        }
        Err(e) => {
            let _ = tracing_subscriber::registry()
                .with(LevelFilter::INFO)
                .with(stdout_layer)
                .try_init();
            tracing::warn!(
                "Could not open log file {}: {} -- logging to stdout only",
                log_file.display(),
                e
            );
        }
    }
}
