/// Run reporting: the explicit side channel of the pipeline.
///
/// Pipeline stages never log per-file results on their own. They hand a
/// [`RunEvent`] to the [`Reporter`] they were given, and the caller decides
/// whether that ends up in the log file, a GUI channel, or a test buffer.
use crate::extract::TitleMissing;
use crate::model::RenameOutcome;
use parking_lot::Mutex;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Something noteworthy that happened during a run.
#[derive(Debug)]
pub enum RunEvent {
    /// The directory was scanned; `total` files will be processed.
    Started { directory: PathBuf, total: usize },
    /// A matching entry was dropped because its metadata could not be read.
    EntryUnreadable {
        path: PathBuf,
        error: std::io::Error,
    },
    /// A matching name that is not a regular file (e.g. a directory).
    NotAFile { path: PathBuf },
    /// No usable heading could be extracted from a file.
    TitleMissing { path: PathBuf, cause: TitleMissing },
    /// Every candidate name for `title` is taken; the file keeps its name.
    NameExhausted { path: PathBuf, title: String },
    /// The filesystem refused a rename.
    RenameFailed {
        original: String,
        target: String,
        error: std::io::Error,
    },
    /// A file reached its final outcome. `position` is 1-based.
    FileProcessed {
        position: usize,
        total: usize,
        outcome: RenameOutcome,
    },
    /// All files have been processed.
    Finished { renamed: usize, skipped: usize },
}

/// Receiver for run events.
pub trait Reporter {
    fn report(&self, event: RunEvent);
}

/// Write an event to the `tracing` log at the level matching its severity.
pub fn log_event(event: &RunEvent) {
    match event {
        RunEvent::Started { directory, total } => {
            info!("Processing {} file(s) in {}", total, directory.display());
        }
        RunEvent::EntryUnreadable { path, error } => {
            error!("Error accessing {}: {}", path.display(), error);
        }
        RunEvent::NotAFile { path } => {
            warn!("Skipping {}: not a regular file", path.display());
        }
        RunEvent::TitleMissing { path, cause } => match cause {
            TitleMissing::NotFound { .. } | TitleMissing::Unusable(_) => {
                warn!("{} in {}", cause, path.display());
            }
            TitleMissing::Unreadable(_) | TitleMissing::NotUtf8 => {
                error!("Error processing {}: {}", path.display(), cause);
            }
        },
        RunEvent::NameExhausted { path, title } => {
            warn!(
                "No free filename for title '{}' in {}, keeping original name",
                title,
                path.display()
            );
        }
        RunEvent::RenameFailed {
            original,
            target,
            error,
        } => {
            error!("Error renaming {} to {}: {}", original, target, error);
        }
        RunEvent::FileProcessed { outcome, .. } => {
            if let RenameOutcome::Renamed(r) = outcome {
                info!("Renamed '{}' to '{}'", r.original, r.new_name);
            }
        }
        RunEvent::Finished { renamed, skipped } => {
            info!("Run finished: {} renamed, {} skipped", renamed, skipped);
        }
    }
}

/// Reporter that only writes to the `tracing` log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: RunEvent) {
        log_event(&event);
    }
}

/// Reporter that keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<RunEvent>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return all recorded events.
    pub fn take(&self) -> Vec<RunEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, event: RunEvent) {
        self.events.lock().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_reporter_records_in_order() {
        let reporter = MemoryReporter::new();
        assert!(reporter.is_empty());

        reporter.report(RunEvent::Started {
            directory: PathBuf::from("pages"),
            total: 2,
        });
        reporter.report(RunEvent::Finished {
            renamed: 1,
            skipped: 1,
        });
        assert_eq!(reporter.len(), 2);

        let events = reporter.take();
        assert!(matches!(events[0], RunEvent::Started { total: 2, .. }));
        assert!(matches!(
            events[1],
            RunEvent::Finished {
                renamed: 1,
                skipped: 1
            }
        ));
        assert!(reporter.is_empty(), "take() must drain the buffer");
    }

    /// Logging must not panic even without an installed subscriber.
    #[test]
    fn tracing_reporter_accepts_every_event_kind() {
        let r = TracingReporter;
        r.report(RunEvent::EntryUnreadable {
            path: PathBuf::from("gone.html"),
            error: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        r.report(RunEvent::TitleMissing {
            path: PathBuf::from("a.html"),
            cause: TitleMissing::NotUtf8,
        });
        r.report(RunEvent::NotAFile {
            path: PathBuf::from("folder.html"),
        });
        r.report(RunEvent::NameExhausted {
            path: PathBuf::from("a.html"),
            title: "Intro".into(),
        });
        r.report(RunEvent::RenameFailed {
            original: "a.html".into(),
            target: "A.html".into(),
            error: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });
        r.report(RunEvent::FileProcessed {
            position: 1,
            total: 1,
            outcome: RenameOutcome::renamed("a.html", "A.html"),
        });
    }
}
