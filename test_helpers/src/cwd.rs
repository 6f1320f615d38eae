//! Serialised working-directory changes for tests.
//!
//! The working directory is process-global and drives path-chain
//! enumeration, so tests that move it hold a global lock until the original
//! directory is restored.
//!
//! # Examples
//!
//! ```no_run
//! use enumconf_test_helpers::cwd;
//!
//! let guard = cwd::set_dir("/tmp").expect("enter /tmp");
//! // The working directory is `/tmp` until `guard` drops.
//! guard.restore().expect("restore working directory");
//! ```

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use parking_lot::{Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(Mutex::default);

/// Restores the original working directory on drop.
#[must_use = "dropping restores the prior working directory"]
pub struct CwdGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    /// The directory that will be restored.
    #[must_use]
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Restores the original directory, reporting failure to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the original directory can no longer be entered.
    pub fn restore(&self) -> Result<()> {
        std::env::set_current_dir(&self.original)
            .with_context(|| format!("restore working directory {}", self.original.display()))
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        // Best effort; call `restore` to observe failures.
        let _ignored = std::env::set_current_dir(&self.original);
    }
}

/// Enters `path` and returns a guard that restores the previous directory.
///
/// The original directory is captured before moving, so a failure leaves the
/// process where it was.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read or `path` cannot
/// be entered.
pub fn set_dir(path: impl AsRef<Path>) -> Result<CwdGuard> {
    let lock = CWD_LOCK.lock();
    let original = std::env::current_dir().context("read current dir")?;
    std::env::set_current_dir(path.as_ref())
        .with_context(|| format!("enter {}", path.as_ref().display()))?;
    Ok(CwdGuard {
        original,
        _lock: lock,
    })
}
