/// Scanner module: lists candidate files in one directory.
///
/// The scan is flat (no recursion) and sequential. Matching entries that are
/// not regular files, or whose metadata cannot be read, are reported and left
/// out; only a directory that cannot be
/// listed at all fails the scan.
use crate::error::{RenameError, Result};
use crate::model::FileEntry;
use crate::report::{Reporter, RunEvent};
use std::fs;
use std::path::Path;

/// Extension (without the dot) of the files the scanner picks up.
pub const DEFAULT_EXTENSION: &str = "html";

/// Whether `name` ends with `.{extension}`, ignoring ASCII case.
pub fn has_extension(name: &str, extension: &str) -> bool {
    let suffix = format!(".{}", extension.to_ascii_lowercase());
    name.to_ascii_lowercase().ends_with(&suffix)
}

/// Collect every regular file in `directory` whose name ends with
/// `.{extension}`, together with its creation timestamp.
///
/// Output order is whatever the OS listing returns; use
/// [`sort_by_creation`] before processing.
pub fn scan_directory(
    directory: &Path,
    extension: &str,
    reporter: &dyn Reporter,
) -> Result<Vec<FileEntry>> {
    let meta = fs::metadata(directory).map_err(|source| RenameError::ReadDir {
        path: directory.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(RenameError::NotADirectory(directory.to_path_buf()));
    }

    let listing = fs::read_dir(directory).map_err(|source| RenameError::ReadDir {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry_result in listing {
        let entry = match entry_result {
            Ok(e) => e,
            Err(error) => {
                reporter.report(RunEvent::EntryUnreadable {
                    path: directory.to_path_buf(),
                    error,
                });
                continue;
            }
        };

        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        if !has_extension(&name, extension) {
            continue;
        }

        let path = entry.path();
        // Follows symlinks, so a link to a page is renamed like the page.
        let created = fs::metadata(&path).and_then(|m| {
            if !m.is_file() {
                return Ok(None);
            }
            m.created().or_else(|_| m.modified()).map(Some)
        });

        match created {
            Ok(Some(created_at)) => entries.push(FileEntry::new(&*name, path, created_at)),
            Ok(None) => reporter.report(RunEvent::NotAFile { path }),
            Err(error) => reporter.report(RunEvent::EntryUnreadable { path, error }),
        }
    }

    Ok(entries)
}

/// Sort entries oldest first. Stable, so equal timestamps keep listing order.
pub fn sort_by_creation(mut entries: Vec<FileEntry>) -> Vec<FileEntry> {
    entries.sort_by_key(|e| e.created_at);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    fn entry(name: &str, secs: u64) -> FileEntry {
        FileEntry::new(
            name,
            PathBuf::from(name),
            UNIX_EPOCH + Duration::from_secs(secs),
        )
    }

    #[test]
    fn extension_match_ignores_case() {
        assert!(has_extension("page.html", "html"));
        assert!(has_extension("PAGE.HTML", "html"));
        assert!(has_extension("Mixed.HtMl", "HTML"));
        assert!(!has_extension("page.htm", "html"));
        assert!(!has_extension("page.html.bak", "html"));
        assert!(!has_extension("html", "html"));
    }

    #[test]
    fn sort_orders_oldest_first() {
        let sorted = sort_by_creation(vec![entry("c", 30), entry("a", 10), entry("b", 20)]);
        let names: Vec<&str> = sorted.iter().map(|e| e.original_name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn sort_is_stable_for_equal_timestamps() {
        let sorted = sort_by_creation(vec![entry("x", 5), entry("y", 5), entry("w", 1)]);
        let names: Vec<&str> = sorted.iter().map(|e| e.original_name.as_str()).collect();
        assert_eq!(names, ["w", "x", "y"]);
    }

    #[test]
    fn scan_picks_only_matching_files() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("a.html"), "a").unwrap();
        fs::write(dir.path().join("B.HTML"), "b").unwrap();
        fs::write(dir.path().join("notes.txt"), "n").unwrap();
        fs::create_dir(dir.path().join("folder.html")).unwrap();

        let reporter = MemoryReporter::new();
        let mut names: Vec<String> = scan_directory(dir.path(), DEFAULT_EXTENSION, &reporter)
            .unwrap()
            .into_iter()
            .map(|e| e.original_name.to_string())
            .collect();
        names.sort();

        assert_eq!(names, ["B.HTML", "a.html"]);
        let events = reporter.take();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            RunEvent::NotAFile { path } if path.ends_with("folder.html")
        ));
    }

    #[test]
    fn entries_carry_full_path_and_timestamp() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(dir.path().join("one.html"), "1").unwrap();

        let entries = scan_directory(dir.path(), "html", &MemoryReporter::new()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, dir.path().join("one.html"));
        assert!(entries[0].created_at <= SystemTime::now());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let gone = dir.path().join("nope");
        let err = scan_directory(&gone, "html", &MemoryReporter::new()).unwrap_err();
        assert!(matches!(err, RenameError::ReadDir { .. }));
    }

    #[test]
    fn file_instead_of_directory_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("a.html");
        fs::write(&file, "x").unwrap();
        let err = scan_directory(&file, "html", &MemoryReporter::new()).unwrap_err();
        assert!(matches!(err, RenameError::NotADirectory(_)));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_reported_and_excluded() {
        let dir = tempfile::TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("target.html"), dir.path().join("link.html"))
            .unwrap();
        fs::write(dir.path().join("real.html"), "x").unwrap();

        let reporter = MemoryReporter::new();
        let entries = scan_directory(dir.path(), "html", &reporter).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].original_name.as_str(), "real.html");
        let events = reporter.take();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            RunEvent::EntryUnreadable { path, .. } if path.ends_with("link.html")
        ));
    }
}
