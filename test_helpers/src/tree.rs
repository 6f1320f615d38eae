//! Throwaway directory trees populated with configuration files.
//!
//! Files are written through a `cap-std` handle on the temporary root so a
//! test can never write outside its own tree.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use tempfile::TempDir;

/// A temporary directory tree removed on drop.
#[derive(Debug)]
pub struct ConfigTree {
    root: PathBuf,
    dir: Dir,
    _temp: TempDir,
}

impl ConfigTree {
    /// Creates an empty tree under the system temporary directory.
    ///
    /// The root is canonicalised so it compares equal to
    /// `std::env::current_dir` after entering it.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or its path is not
    /// valid UTF-8.
    pub fn new() -> Result<Self> {
        let temp = TempDir::new().context("create temporary tree")?;
        let root = std::fs::canonicalize(temp.path()).context("canonicalise tree root")?;
        let utf8_root = Utf8Path::from_path(&root)
            .ok_or_else(|| anyhow!("tree root is not valid UTF-8: {}", root.display()))?;
        let dir = Dir::open_ambient_dir(utf8_root, ambient_authority())
            .context("open tree root with cap-std")?;
        Ok(Self {
            root,
            dir,
            _temp: temp,
        })
    }

    /// Absolute path of the tree root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of `relative` inside the tree.
    #[must_use]
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Creates `relative` and any missing parents as directories.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    pub fn dir(&self, relative: &str) -> Result<PathBuf> {
        self.dir
            .create_dir_all(relative)
            .with_context(|| format!("create directory {relative}"))?;
        Ok(self.path(relative))
    }

    /// Writes `contents` to `relative`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the parents or the file cannot be created.
    pub fn file(&self, relative: &str, contents: &str) -> Result<PathBuf> {
        if let Some(parent) = Utf8Path::new(relative)
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
        {
            self.dir
                .create_dir_all(parent)
                .with_context(|| format!("create parent of {relative}"))?;
        }
        let mut file = self
            .dir
            .create(relative)
            .with_context(|| format!("create file {relative}"))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("write file {relative}"))?;
        Ok(self.path(relative))
    }
}
