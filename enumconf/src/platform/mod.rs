//! Platform policy: system configuration roots and the user configuration
//! directory.

use std::ffi::OsString;
use std::path::PathBuf;

/// Machine-wide configuration roots searched by default, in load order.
#[cfg(all(unix, not(target_os = "macos")))]
pub const DEFAULT_SYSTEM_ROOTS: &[&str] = &["/etc", "/etc/xdg"];

/// Machine-wide configuration roots searched by default, in load order.
#[cfg(target_os = "macos")]
pub const DEFAULT_SYSTEM_ROOTS: &[&str] = &["/etc", "/Library/Application Support"];

/// Machine-wide configuration roots searched by default, in load order.
#[cfg(windows)]
pub const DEFAULT_SYSTEM_ROOTS: &[&str] = &["C:\\ProgramData"];

/// Machine-wide configuration roots searched by default, in load order.
#[cfg(not(any(unix, windows)))]
pub const DEFAULT_SYSTEM_ROOTS: &[&str] = &[];

/// Returns [`DEFAULT_SYSTEM_ROOTS`] as owned paths.
#[must_use]
pub fn default_system_roots() -> Vec<PathBuf> {
    DEFAULT_SYSTEM_ROOTS.iter().map(PathBuf::from).collect()
}

/// Resolves the per-user configuration directory from the environment.
///
/// - Linux and BSD: `$XDG_CONFIG_HOME` when it is absolute, otherwise
///   `$HOME/.config`. A relative `$XDG_CONFIG_HOME` is rejected rather than
///   ignored.
/// - macOS: `$HOME/Library/Application Support`.
/// - Windows: `%APPDATA%`.
///
/// Empty variables count as unset. Returns `None` when the required
/// variables are missing; no account database is consulted.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    user_config_dir_with(|key| std::env::var_os(key))
}

/// [`user_config_dir`] with a custom variable lookup.
pub(crate) fn user_config_dir_with<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    let var = |key: &str| lookup(key).filter(|value| !value.is_empty()).map(PathBuf::from);
    resolve(var)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn resolve(var: impl Fn(&str) -> Option<PathBuf>) -> Option<PathBuf> {
    match var("XDG_CONFIG_HOME") {
        Some(dir) if dir.is_absolute() => Some(dir),
        Some(_) => None,
        None => var("HOME").map(|home| home.join(".config")),
    }
}

#[cfg(target_os = "macos")]
fn resolve(var: impl Fn(&str) -> Option<PathBuf>) -> Option<PathBuf> {
    var("HOME").map(|home| home.join("Library").join("Application Support"))
}

#[cfg(windows)]
fn resolve(var: impl Fn(&str) -> Option<PathBuf>) -> Option<PathBuf> {
    var("APPDATA")
}

#[cfg(not(any(unix, windows)))]
fn resolve(_var: impl Fn(&str) -> Option<PathBuf>) -> Option<PathBuf> {
    None
}
