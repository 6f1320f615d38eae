//! Serialised environment-variable mutation for tests.
//!
//! Enumeration reads `XDG_CONFIG_HOME`, `HOME` and friends at call time, so
//! tests that redirect the user configuration directory must not race each
//! other. Every mutation here takes one process-wide re-entrant lock and
//! returns a guard that restores the previous value on drop.
//!
//! # Examples
//!
//! ```
//! use enumconf_test_helpers::env;
//!
//! let _scope = env::EnvScope::new_with(|lock| vec![lock.set_var("DEMO_KEY", "1")]);
//! assert_eq!(std::env::var("DEMO_KEY").as_deref(), Ok("1"));
//! ```

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

static ENV_LOCK: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Restores one environment variable to its prior state on drop.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    previous: Option<OsString>,
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("was_set", &self.previous.is_some())
            .finish()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _lock = ENV_LOCK.lock();
        write_var(&self.key, self.previous.take().as_deref());
    }
}

/// Holds the environment lock; mutations made through it stay serialised.
#[must_use = "dropping releases the environment lock"]
pub struct EnvVarLock {
    _guard: ReentrantMutexGuard<'static, ()>,
}

impl EnvVarLock {
    /// Sets `key` to `value` while the lock is held.
    pub fn set_var(&self, key: impl Into<String>, value: impl AsRef<OsStr>) -> EnvVarGuard {
        replace_var(key.into(), Some(value.as_ref()))
    }

    /// Removes `key` while the lock is held.
    pub fn remove_var(&self, key: impl Into<String>) -> EnvVarGuard {
        replace_var(key.into(), None)
    }
}

/// Keeps the environment lock and a set of guards alive together.
///
/// Guards are restored before the lock is released.
#[must_use = "dropping restores the variables and releases the lock"]
pub struct EnvScope {
    _guards: Vec<EnvVarGuard>,
    _lock: EnvVarLock,
}

impl EnvScope {
    /// Takes the lock, then runs `build` to apply the scope's mutations.
    pub fn new_with<F>(build: F) -> Self
    where
        F: FnOnce(&EnvVarLock) -> Vec<EnvVarGuard>,
    {
        let lock = lock();
        let guards = build(&lock);
        Self {
            _guards: guards,
            _lock: lock,
        }
    }
}

/// Points the platform user configuration directory at `dir`.
///
/// Sets `XDG_CONFIG_HOME` to `dir` and `HOME` to its parent, which is what
/// `enumconf::platform::user_config_dir` consults on Linux.
pub fn user_config_home(dir: &Path) -> EnvScope {
    let home = dir.parent().unwrap_or(dir).to_path_buf();
    EnvScope::new_with(|lock| {
        vec![
            lock.set_var("XDG_CONFIG_HOME", dir),
            lock.set_var("HOME", home),
        ]
    })
}

/// Sets `key` to `value`, restoring the prior value when the guard drops.
pub fn set_var(key: impl Into<String>, value: impl AsRef<OsStr>) -> EnvVarGuard {
    lock().set_var(key, value)
}

/// Removes `key`, restoring the prior value when the guard drops.
pub fn remove_var(key: impl Into<String>) -> EnvVarGuard {
    lock().remove_var(key)
}

/// Acquires the environment lock for the lifetime of the returned value.
///
/// Take it in tests that only read variables but need them stable.
pub fn lock() -> EnvVarLock {
    EnvVarLock {
        _guard: ENV_LOCK.lock(),
    }
}

fn replace_var(key: String, value: Option<&OsStr>) -> EnvVarGuard {
    let _lock = ENV_LOCK.lock();
    let previous = std::env::var_os(&key);
    write_var(&key, value);
    EnvVarGuard { key, previous }
}

fn write_var(key: &str, value: Option<&OsStr>) {
    // SAFETY: callers hold `ENV_LOCK`, so no other helper mutates the
    // environment concurrently.
    match value {
        Some(v) => unsafe { std::env::set_var(key, v) },
        None => unsafe { std::env::remove_var(key) },
    }
}
