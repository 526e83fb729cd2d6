/// The rename pipeline: scan, extract, sanitise, resolve, rename.
///
/// One file at a time, oldest first. Every scanned file produces exactly one
/// [`RenameOutcome`]; nothing that goes wrong with one file stops the others.
use crate::error::Result;
use crate::extract::{read_title, TitleMissing, TitleSelector};
use crate::model::{FileEntry, RenameOutcome, RunReport, SkipReason};
use crate::rename::{rename_entry, Filesystem, StdFilesystem};
use crate::report::{Reporter, RunEvent};
use crate::resolve::{resolve_filename, AssignedNames, IndexCounter};
use crate::sanitize::sanitize;
use crate::scanner::{scan_directory, sort_by_creation, DEFAULT_EXTENSION};
use std::path::Path;
use tracing::debug;

/// Options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    /// Extension of the files to process, and of the new names.
    pub extension: String,
    /// Heading the title is read from.
    pub selector: TitleSelector,
    /// Prefix each new name with `"{n}. "` in creation order.
    pub add_index: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            selector: TitleSelector::default(),
            add_index: false,
        }
    }
}

impl RenameOptions {
    pub fn with_index(mut self, add_index: bool) -> Self {
        self.add_index = add_index;
        self
    }
}

/// Question asked before a run touches `directory`.
pub fn confirmation_prompt(directory: &Path, options: &RenameOptions) -> String {
    let mut prompt = format!(
        "Are you sure you want to rename .{} files in:\n{}",
        options.extension,
        directory.display()
    );
    if options.add_index {
        prompt.push_str("\n\nThe files will be prefixed with an index based on creation date.");
    }
    prompt
}

/// Rename every matching file in `directory` using the real filesystem.
pub fn rename_directory(
    directory: &Path,
    options: &RenameOptions,
    reporter: &dyn Reporter,
) -> Result<RunReport> {
    rename_directory_with(directory, options, &StdFilesystem, reporter)
}

/// [`rename_directory`] with an explicit [`Filesystem`] for target checks and
/// renames. Scanning and reading always use the real filesystem.
pub fn rename_directory_with(
    directory: &Path,
    options: &RenameOptions,
    fs: &dyn Filesystem,
    reporter: &dyn Reporter,
) -> Result<RunReport> {
    let entries = sort_by_creation(scan_directory(directory, &options.extension, reporter)?);
    let total = entries.len();
    reporter.report(RunEvent::Started {
        directory: directory.to_path_buf(),
        total,
    });

    let mut report = RunReport::new(directory.to_path_buf(), options.add_index);
    let mut assigned = AssignedNames::new();
    let mut index = IndexCounter::new();

    for (i, entry) in entries.iter().enumerate() {
        debug!(
            "[{}/{}] {} (created {})",
            i + 1,
            total,
            entry.original_name,
            entry.created_local().format("%Y-%m-%d %H:%M:%S")
        );
        let outcome = process_entry(
            entry,
            directory,
            options,
            &mut assigned,
            &mut index,
            fs,
            reporter,
        );
        reporter.report(RunEvent::FileProcessed {
            position: i + 1,
            total,
            outcome: outcome.clone(),
        });
        report.push(outcome);
    }

    reporter.report(RunEvent::Finished {
        renamed: report.renamed.len(),
        skipped: report.skipped.len(),
    });
    Ok(report)
}

fn process_entry(
    entry: &FileEntry,
    directory: &Path,
    options: &RenameOptions,
    assigned: &mut AssignedNames,
    index: &mut IndexCounter,
    fs: &dyn Filesystem,
    reporter: &dyn Reporter,
) -> RenameOutcome {
    let no_title = |cause: TitleMissing| {
        reporter.report(RunEvent::TitleMissing {
            path: entry.path.clone(),
            cause,
        });
        RenameOutcome::skipped(entry.original_name.as_str(), SkipReason::NoTitleFound)
    };

    let raw_title = match read_title(&entry.path, &options.selector) {
        Ok(t) => t,
        Err(cause) => return no_title(cause),
    };
    let title = sanitize(&raw_title);
    if title.is_empty() {
        return no_title(TitleMissing::Unusable(raw_title));
    }

    let Some(resolved) = resolve_filename(&title, &options.extension, directory, assigned, fs)
    else {
        reporter.report(RunEvent::NameExhausted {
            path: entry.path.clone(),
            title,
        });
        return RenameOutcome::skipped(entry.original_name.as_str(), SkipReason::Collision);
    };

    // The prefixed name is not re-checked; the index alone keeps it unique.
    let final_name = if options.add_index {
        index.prefix(&resolved)
    } else {
        resolved
    };

    rename_entry(entry, final_name, fs, reporter)
}
