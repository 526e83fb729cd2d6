/// A single candidate file discovered by the scanner.
use compact_str::CompactString;
use std::path::PathBuf;
use std::time::SystemTime;

/// One matching file in the scanned directory.
///
/// Immutable once created; the pipeline only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File name as listed in the directory (lossy UTF-8 for display).
    pub original_name: CompactString,
    /// Full path used for reading and renaming.
    pub path: PathBuf,
    /// Creation timestamp (modification time where the platform has no
    /// birth time).
    pub created_at: SystemTime,
}

impl FileEntry {
    pub fn new(
        original_name: impl Into<CompactString>,
        path: PathBuf,
        created_at: SystemTime,
    ) -> Self {
        Self {
            original_name: original_name.into(),
            path,
            created_at,
        }
    }

    /// Creation time in the local timezone, for display.
    pub fn created_local(&self) -> chrono::DateTime<chrono::Local> {
        chrono::DateTime::<chrono::Local>::from(self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn local_time_matches_system_time() {
        let at = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let entry = FileEntry::new("a.html", PathBuf::from("a.html"), at);
        assert_eq!(entry.created_local().timestamp(), 1_700_000_000);
        assert_eq!(entry.original_name, "a.html");
    }
}
