//! In-memory [`FileSystem`] for deterministic tests.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use super::{EntryKind, FileSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Present(EntryKind),
    Failing(io::ErrorKind),
}

/// A filesystem that exists only in memory.
///
/// Registering a file also registers each of its ancestors as a directory,
/// unless an entry already exists there. Paths are compared component-wise,
/// so `/a//b` and `/a/b` refer to the same entry.
///
/// # Examples
///
/// ```rust
/// use std::path::Path;
///
/// use enumconf::{EntryKind, FileSystem, MemoryFileSystem};
///
/// let fs = MemoryFileSystem::new().with_file("/etc/demo/demo.conf");
/// assert_eq!(fs.entry_kind(Path::new("/etc/demo")).ok(), Some(EntryKind::Directory));
/// assert!(fs.entry_kind(Path::new("/etc/other.conf")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    entries: BTreeMap<PathBuf, Entry>,
}

impl MemoryFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a non-directory entry at `path`.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        let file = path.into();
        self.register_ancestors(&file);
        self.entries.insert(file, Entry::Present(EntryKind::File));
        self
    }

    /// Registers a directory at `path`.
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let dir = path.into();
        self.register_ancestors(&dir);
        self.entries.insert(dir, Entry::Present(EntryKind::Directory));
        self
    }

    /// Makes every lookup of `path` fail with `kind`.
    ///
    /// Useful for simulating permission errors and similar lookup failures.
    #[must_use]
    pub fn with_error(mut self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.entries.insert(path.into(), Entry::Failing(kind));
        self
    }

    fn register_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.entries
                .entry(ancestor.to_path_buf())
                .or_insert(Entry::Present(EntryKind::Directory));
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        match self.entries.get(path) {
            Some(Entry::Present(kind)) => Ok(*kind),
            Some(Entry::Failing(kind)) => Err(io::Error::new(
                *kind,
                format!("lookup of {} failed", path.display()),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )),
        }
    }
}
