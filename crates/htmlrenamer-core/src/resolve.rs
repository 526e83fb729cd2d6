/// Collision resolution: picks a filename that is free both within the
/// current run and on disk, and applies the optional index prefix.
use crate::rename::Filesystem;
use std::collections::HashSet;
use std::path::Path;

/// Highest numeric suffix tried before a title is given up as a collision.
pub const MAX_COLLISION_SUFFIX: u32 = 10_000;

/// Filenames claimed so far in one run. Append-only.
#[derive(Debug, Default, Clone)]
pub struct AssignedNames {
    names: HashSet<String>,
}

impl AssignedNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Reserve `name`. Returns `false` if it was already claimed.
    pub fn claim(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Find a free `"{title}.{extension}"` in `directory`, trying
/// `"{title}_2.{extension}"`, `_3`, … when taken.
///
/// The winning name is claimed in `assigned` before it is returned, so a
/// second file with the same title in this run gets the next suffix even if
/// the first rename has not happened yet. Returns `None` once
/// [`MAX_COLLISION_SUFFIX`] is exceeded.
pub fn resolve_filename(
    title: &str,
    extension: &str,
    directory: &Path,
    assigned: &mut AssignedNames,
    fs: &dyn Filesystem,
) -> Option<String> {
    let is_free = |name: &str, assigned: &AssignedNames| {
        !assigned.contains(name) && !fs.exists(&directory.join(name))
    };

    let base = format!("{title}.{extension}");
    if is_free(&base, assigned) {
        assigned.claim(base.clone());
        return Some(base);
    }

    let found = (2..=MAX_COLLISION_SUFFIX)
        .map(|suffix| format!("{title}_{suffix}.{extension}"))
        .find(|candidate| is_free(candidate, assigned))?;
    assigned.claim(found.clone());
    Some(found)
}

/// Hands out `"1. "`, `"2. "`, … prefixes in call order.
#[derive(Debug, Clone)]
pub struct IndexCounter {
    next: usize,
}

impl Default for IndexCounter {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IndexCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix `name` with the next index and advance.
    pub fn prefix(&mut self, name: &str) -> String {
        let prefixed = format!("{}. {}", self.next, name);
        self.next += 1;
        prefixed
    }

    /// Index the next call to [`prefix`](Self::prefix) will use.
    pub fn peek(&self) -> usize {
        self.next
    }
}
