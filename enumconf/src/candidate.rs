//! Provenance-tagged candidate paths.

use std::fmt;
use std::path::PathBuf;

/// Location family a candidate path was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// A machine-wide system configuration root.
    System,
    /// The per-user configuration directory.
    User,
    /// A directory on the chain from the filesystem root to the working
    /// directory.
    Path,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::System => "system",
            Self::User => "user",
            Self::Path => "path",
        };
        f.write_str(label)
    }
}

/// A candidate configuration path together with the location it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The candidate file path.
    pub path: PathBuf,
    /// Location family that produced `path`.
    pub source: Source,
}

impl Candidate {
    pub(crate) const fn new(path: PathBuf, source: Source) -> Self {
        Self { path, source }
    }

    /// Consumes the candidate and returns its path.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
