//! Candidate generation for [`Enumerator`].

use std::path::{Path, PathBuf};

use camino::Utf8PathBuf;
use tracing::{debug, trace};

use super::Enumerator;
use crate::candidate::{Candidate, Source};
use crate::error::{EnumConfError, EnumConfResult};
use crate::fs::EntryKind;
use crate::platform;

impl Enumerator {
    /// Returns every configuration file in load order.
    ///
    /// The result is [`Enumerator::enumerate_system`], followed by
    /// [`Enumerator::enumerate_user`], followed by
    /// [`Enumerator::enumerate_path`]. Later entries are more specific and
    /// are expected to override earlier ones.
    #[must_use]
    pub fn enumerate(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        self.push_system(&mut paths);
        self.push_user(&mut paths);
        self.push_path(&mut paths);
        paths
    }

    /// Returns the files found under the system configuration roots.
    ///
    /// Each root contributes at most `<root>/<app_name>/<config_file_name>`,
    /// in root order.
    #[must_use]
    pub fn enumerate_system(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        self.push_system(&mut paths);
        paths
    }

    /// Returns the file found in the user configuration directory, if any.
    ///
    /// Yields `<user_dir>/<app_name>/<config_file_name>`, or nothing when the
    /// platform has no user configuration directory.
    #[must_use]
    pub fn enumerate_user(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        self.push_user(&mut paths);
        paths
    }

    /// Returns the dotfiles found between the filesystem root and the
    /// working directory, root first.
    ///
    /// Yields nothing when the working directory cannot be determined.
    #[must_use]
    pub fn enumerate_path(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        self.push_path(&mut paths);
        paths
    }

    /// Walks from the root of `dir` down to `dir` itself, looking for the
    /// in-path dotfile at every level.
    ///
    /// A relative `dir` is walked up to its first component, with the empty
    /// prefix standing for the current directory.
    ///
    /// ```rust
    /// use std::path::Path;
    ///
    /// use enumconf::Enumerator;
    ///
    /// let paths = Enumerator::new("app")
    ///     .include_missing(true)
    ///     .enumerate_path_from("/a/b");
    /// assert_eq!(
    ///     paths,
    ///     vec![
    ///         Path::new("/").join(".app"),
    ///         Path::new("/a").join(".app"),
    ///         Path::new("/a/b").join(".app"),
    ///     ],
    /// );
    /// ```
    #[must_use]
    pub fn enumerate_path_from(&self, dir: impl AsRef<Path>) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        self.push_chain(&mut paths, dir.as_ref());
        paths
    }

    /// Returns the same sequence as [`Enumerator::enumerate`], with each path
    /// tagged by the location family that produced it.
    #[must_use]
    pub fn enumerate_candidates(&self) -> Vec<Candidate> {
        let tag = |paths: Vec<PathBuf>, source: Source| {
            paths
                .into_iter()
                .map(move |path| Candidate::new(path, source))
        };
        tag(self.enumerate_system(), Source::System)
            .chain(tag(self.enumerate_user(), Source::User))
            .chain(tag(self.enumerate_path(), Source::Path))
            .collect()
    }

    /// Returns [`Enumerator::enumerate`] as [`camino::Utf8PathBuf`] values.
    ///
    /// Paths that cannot be represented as UTF-8 are omitted.
    #[must_use]
    pub fn enumerate_utf8(&self) -> Vec<Utf8PathBuf> {
        self.enumerate()
            .into_iter()
            .filter_map(|path| Utf8PathBuf::from_path_buf(path).ok())
            .collect()
    }

    /// Resolves the user configuration directory consulted by
    /// [`Enumerator::enumerate_user`].
    ///
    /// Enumeration silently skips the user location when this fails; call it
    /// directly to tell "no configuration" apart from "no user directory".
    ///
    /// # Errors
    ///
    /// Returns [`EnumConfError::UserConfigDirUnavailable`] when the platform
    /// provides no user configuration directory.
    pub fn user_config_dir() -> EnumConfResult<PathBuf> {
        platform::user_config_dir().ok_or(EnumConfError::UserConfigDirUnavailable)
    }

    /// Resolves the working directory walked by [`Enumerator::enumerate_path`].
    ///
    /// # Errors
    ///
    /// Returns [`EnumConfError::WorkingDir`] when the working directory cannot
    /// be read, for example because it has been deleted.
    pub fn working_dir() -> EnumConfResult<PathBuf> {
        std::env::current_dir().map_err(|source| EnumConfError::WorkingDir { source })
    }

    fn push_system(&self, paths: &mut Vec<PathBuf>) {
        for root in &self.system_roots {
            let candidate = root.join(&self.app_name).join(&self.config_file_name);
            self.push_if_file(paths, candidate, Source::System);
        }
    }

    fn push_user(&self, paths: &mut Vec<PathBuf>) {
        match Self::user_config_dir() {
            Ok(dir) => {
                let candidate = dir.join(&self.app_name).join(&self.config_file_name);
                self.push_if_file(paths, candidate, Source::User);
            }
            Err(err) => debug!(app = %self.app_name, error = %err, "skipping user configuration"),
        }
    }

    fn push_path(&self, paths: &mut Vec<PathBuf>) {
        match Self::working_dir() {
            Ok(dir) => self.push_chain(paths, &dir),
            Err(err) => debug!(app = %self.app_name, error = %err, "skipping path configuration"),
        }
    }

    fn push_chain(&self, paths: &mut Vec<PathBuf>, dir: &Path) {
        // `ancestors` ends at the root, whose parent is `None`.
        let levels: Vec<&Path> = dir.ancestors().collect();
        for level in levels.into_iter().rev() {
            let candidate = level.join(&self.config_file_name_in_path);
            self.push_if_file(paths, candidate, Source::Path);
        }
    }

    fn push_if_file(&self, paths: &mut Vec<PathBuf>, candidate: PathBuf, source: Source) {
        if self.include_missing || self.is_file(&candidate, source) {
            trace!(path = %candidate.display(), %source, "configuration candidate");
            paths.push(candidate);
        }
    }

    fn is_file(&self, candidate: &Path, source: Source) -> bool {
        match self.file_system.entry_kind(candidate) {
            Ok(EntryKind::File) => true,
            Ok(EntryKind::Directory) => {
                trace!(path = %candidate.display(), %source, "candidate is a directory");
                false
            }
            Err(err) => {
                trace!(path = %candidate.display(), %source, error = %err, "candidate unavailable");
                false
            }
        }
    }
}
