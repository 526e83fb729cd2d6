/// Per-file results and the aggregated run report.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Why a file was left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message")]
pub enum SkipReason {
    /// The designated heading was missing, empty, or the file could not be
    /// read or decoded.
    NoTitleFound,
    /// No free filename could be found for the title.
    Collision,
    /// The rename itself failed; carries the OS error message.
    FilesystemError(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTitleFound => f.write_str("no qualifying heading found"),
            Self::Collision => f.write_str("no free filename available"),
            Self::FilesystemError(message) => write!(f, "filesystem error: {message}"),
        }
    }
}

/// A file that was renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamedFile {
    pub original: String,
    pub new_name: String,
}

/// A file that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub original: String,
    pub reason: SkipReason,
}

/// The single result produced for every scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenameOutcome {
    Renamed(RenamedFile),
    Skipped(SkippedFile),
}

impl RenameOutcome {
    pub fn renamed(original: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self::Renamed(RenamedFile {
            original: original.into(),
            new_name: new_name.into(),
        })
    }

    pub fn skipped(original: impl Into<String>, reason: SkipReason) -> Self {
        Self::Skipped(SkippedFile {
            original: original.into(),
            reason,
        })
    }

    /// Name of the file before the run.
    pub fn original(&self) -> &str {
        match self {
            Self::Renamed(r) => &r.original,
            Self::Skipped(s) => &s.original,
        }
    }

    pub fn is_renamed(&self) -> bool {
        matches!(self, Self::Renamed(_))
    }
}

/// Everything a presentation layer needs to summarise a run.
///
/// `renamed` and `skipped` keep the processing (creation-time) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub directory: PathBuf,
    pub started_at: chrono::DateTime<chrono::Local>,
    pub add_index: bool,
    pub renamed: Vec<RenamedFile>,
    pub skipped: Vec<SkippedFile>,
}

impl RunReport {
    pub fn new(directory: PathBuf, add_index: bool) -> Self {
        Self {
            directory,
            started_at: chrono::Local::now(),
            add_index,
            renamed: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Route an outcome into the matching sequence.
    pub fn push(&mut self, outcome: RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed(r) => self.renamed.push(r),
            RenameOutcome::Skipped(s) => self.skipped.push(s),
        }
    }

    /// Total number of files the run produced an outcome for.
    pub fn total(&self) -> usize {
        self.renamed.len() + self.skipped.len()
    }

    /// One-line summary, e.g. `"3 renamed, 1 skipped"`.
    pub fn summary(&self) -> String {
        format!(
            "{} renamed, {} skipped",
            self.renamed.len(),
            self.skipped.len()
        )
    }
}
