/// The rename step and the filesystem seam it goes through.
use crate::model::{FileEntry, RenameOutcome, SkipReason};
use crate::report::{Reporter, RunEvent};
use std::io;
use std::path::Path;

/// The two filesystem operations the pipeline performs on targets.
///
/// [`StdFilesystem`] is the real thing; tests substitute an implementation
/// that fails on demand.
pub trait Filesystem {
    /// Whether something already occupies `path`.
    fn exists(&self, path: &Path) -> bool;
    /// Move `from` to `to` within the same directory.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// `std::fs`-backed [`Filesystem`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFilesystem;

impl Filesystem for StdFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }
}

/// Rename `entry` to `new_name` in its own directory.
///
/// A failure is reported and turned into a `Skipped` outcome, never
/// propagated.
pub fn rename_entry(
    entry: &FileEntry,
    new_name: String,
    fs: &dyn Filesystem,
    reporter: &dyn Reporter,
) -> RenameOutcome {
    let target = match entry.path.parent() {
        Some(dir) => dir.join(&new_name),
        None => Path::new(&new_name).to_path_buf(),
    };

    match fs.rename(&entry.path, &target) {
        Ok(()) => RenameOutcome::renamed(entry.original_name.as_str(), new_name),
        Err(error) => {
            let message = error.to_string();
            reporter.report(RunEvent::RenameFailed {
                original: entry.original_name.to_string(),
                target: new_name,
                error,
            });
            RenameOutcome::skipped(
                entry.original_name.as_str(),
                SkipReason::FilesystemError(message),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;
    use std::time::SystemTime;

    struct DenyAll;

    impl Filesystem for DenyAll {
        fn exists(&self, _path: &Path) -> bool {
            false
        }
        fn rename(&self, _from: &Path, _to: &Path) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "access is denied"))
        }
    }

    #[test]
    fn successful_rename_moves_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let src = dir.path().join("page.html");
        std::fs::write(&src, "x").unwrap();
        let entry = FileEntry::new("page.html", src.clone(), SystemTime::now());
        let reporter = MemoryReporter::new();

        let outcome = rename_entry(&entry, "Intro.html".into(), &StdFilesystem, &reporter);

        assert_eq!(outcome, RenameOutcome::renamed("page.html", "Intro.html"));
        assert!(!src.exists());
        assert!(dir.path().join("Intro.html").exists());
        assert!(reporter.is_empty(), "success is reported by the pipeline");
    }

    #[test]
    fn failed_rename_becomes_skipped_with_message() {
        let entry = FileEntry::new("page.html", "dir/page.html".into(), SystemTime::now());
        let reporter = MemoryReporter::new();

        let outcome = rename_entry(&entry, "Intro.html".into(), &DenyAll, &reporter);

        match outcome {
            RenameOutcome::Skipped(s) => {
                assert_eq!(s.original, "page.html");
                assert_eq!(
                    s.reason,
                    SkipReason::FilesystemError("access is denied".into())
                );
            }
            other => panic!("expected Skipped, got {other:?}"),
        }
        let events = reporter.take();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            RunEvent::RenameFailed { target, .. } if target == "Intro.html"
        ));
    }

    #[test]
    fn vanished_source_is_a_filesystem_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let entry = FileEntry::new(
            "deleted.html",
            dir.path().join("deleted.html"),
            SystemTime::now(),
        );
        let outcome = rename_entry(
            &entry,
            "New.html".into(),
            &StdFilesystem,
            &MemoryReporter::new(),
        );
        assert!(matches!(
            outcome,
            RenameOutcome::Skipped(ref s) if matches!(s.reason, SkipReason::FilesystemError(_))
        ));
    }
}
