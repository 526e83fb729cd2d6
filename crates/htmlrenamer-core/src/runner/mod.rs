/// Runner module: executes a rename run on a background thread.
///
/// The pipeline itself stays sequential; the single worker thread only keeps
/// the UI responsive while it runs. There is no mid-run cancellation: once
/// started, a run processes every file.
pub mod progress;

use crate::error::{RenameError, Result};
use crate::pipeline::{rename_directory, RenameOptions};
use crossbeam_channel::Receiver;
use progress::{ChannelReporter, RunProgress};
use std::path::PathBuf;
use std::thread;
use std::time::Instant;
use tracing::info;

/// Maximum number of progress messages that may queue up in the channel.
///
/// Each file produces at most three messages, and the UI drains the channel
/// every frame, so the worker only stalls if the UI stops rendering.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 1_024;

/// Handle to a running or finished background run.
pub struct RunHandle {
    /// Receiver for progress updates from the worker thread.
    pub progress_rx: Receiver<RunProgress>,
    _thread: Option<thread::JoinHandle<()>>,
}

/// Start renaming `directory` on a background thread.
pub fn start_run(directory: PathBuf, options: RenameOptions) -> Result<RunHandle> {
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<RunProgress>(PROGRESS_CHANNEL_CAPACITY);

    let thread = thread::Builder::new()
        .name("htmlrenamer-worker".into())
        .spawn(move || {
            info!(
                "Starting run in {} (index prefix: {})",
                directory.display(),
                options.add_index
            );
            let start = Instant::now();
            let reporter = ChannelReporter::new(progress_tx.clone());

            let message = match rename_directory(&directory, &options, &reporter) {
                Ok(report) => RunProgress::Complete {
                    report,
                    duration: start.elapsed(),
                },
                Err(e) => {
                    tracing::error!("Run failed: {e}");
                    RunProgress::Failed {
                        message: e.to_string(),
                    }
                }
            };
            let _ = progress_tx.send(message);
        })
        .map_err(RenameError::Spawn)?;

    Ok(RunHandle {
        progress_rx,
        _thread: Some(thread),
    })
}
