/// Error types for whole-run failures.
///
/// Per-file problems never show up here: they become a
/// [`RenameOutcome::Skipped`](crate::model::RenameOutcome) or a reported
/// [`RunEvent`](crate::report::RunEvent) and the run carries on.
use std::path::PathBuf;

/// A failure that prevents a run (or an export) from happening at all.
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    /// The selected path exists but is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// The directory listing itself could not be read.
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The background worker thread could not be started.
    #[error("failed to spawn rename worker: {0}")]
    Spawn(#[source] std::io::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RenameError>;
