//! Filesystem probing used to decide whether a candidate exists.
//!
//! Enumeration only needs to know whether a path exists and whether it is a
//! directory. [`FileSystem`] captures exactly that, so tests can substitute
//! [`MemoryFileSystem`] for the real disk.

use std::fmt;
use std::io;
use std::path::Path;

mod memory;

pub use memory::MemoryFileSystem;

/// Kind of entry found at a looked-up path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A directory.
    Directory,
    /// Any entry that is not a directory: regular files, devices, sockets.
    File,
}

impl EntryKind {
    /// Returns `true` for [`EntryKind::Directory`].
    #[must_use]
    pub const fn is_dir(self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// Narrow view of a filesystem: can a path be stat'ed, and what is it?
///
/// Implementations follow symbolic links. Any error, including
/// [`io::ErrorKind::NotFound`], is treated by the enumerator as "does not
/// exist".
pub trait FileSystem: fmt::Debug + Send + Sync {
    /// Reports the kind of entry at `path`.
    ///
    /// # Errors
    ///
    /// Returns an [`io::Error`] when the path does not exist or cannot be
    /// inspected.
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind>;
}

/// The host filesystem, queried with [`std::fs::metadata`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        let metadata = std::fs::metadata(path)?;
        Ok(if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        })
    }
}
