/// Data model for a rename run.
///
/// `FileEntry` values come out of the scanner, one `RenameOutcome` comes out
/// of the pipeline for each of them, and the outcomes are collected into a
/// `RunReport`.
pub mod file_entry;
pub mod outcome;

pub use file_entry::FileEntry;
pub use outcome::{RenameOutcome, RenamedFile, RunReport, SkipReason, SkippedFile};
