//! The configuration file enumerator.
//!
//! [`Enumerator`] holds the discovery settings for one application and
//! answers queries for system, user and working-directory candidates. See
//! [`Enumerator::enumerate`] for the combined load order.

use std::path::PathBuf;
use std::sync::Arc;

use crate::fs::{FileSystem, RealFileSystem};
use crate::options::EnumeratorOptions;
use crate::platform;

mod query;

/// Enumerates configuration files for a single application.
///
/// Settings are adjusted through chained setters that consume and return the
/// enumerator, so a configured instance is never mutated while shared. The
/// enumerator is cheap to clone and may be queried from several threads.
///
/// # Examples
///
/// ```rust,no_run
/// use enumconf::Enumerator;
///
/// let files = Enumerator::new("hello_world")
///     .config_name("config.toml")
///     .enumerate();
/// for file in files {
///     println!("loading {}", file.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Enumerator {
    app_name: String,
    config_file_name: String,
    config_file_name_in_path: String,
    include_missing: bool,
    system_roots: Vec<PathBuf>,
    file_system: Arc<dyn FileSystem>,
}

impl Enumerator {
    /// Creates an enumerator for `app_name`.
    ///
    /// `app_name` must be a single path segment; it is joined onto system and
    /// user directories verbatim. The file name defaults to `<app_name>.conf`
    /// and the in-path dotfile to `.<app_name>`.
    #[must_use]
    pub fn new(app_name: impl Into<String>) -> Self {
        let app_name = app_name.into();
        Self {
            config_file_name: format!("{app_name}.conf"),
            config_file_name_in_path: format!(".{app_name}"),
            app_name,
            include_missing: false,
            system_roots: platform::default_system_roots(),
            file_system: Arc::new(RealFileSystem),
        }
    }

    /// Builds an enumerator from serialisable options.
    ///
    /// Unset optional fields keep the defaults chosen by [`Enumerator::new`].
    #[must_use]
    pub fn from_options(options: EnumeratorOptions) -> Self {
        let EnumeratorOptions {
            app_name,
            config_file_name,
            config_file_name_in_path,
            include_missing,
            system_roots,
        } = options;
        let mut enumerator = Self::new(app_name).include_missing(include_missing);
        if let Some(name) = config_file_name {
            enumerator = enumerator.config_name(name);
        }
        if let Some(name) = config_file_name_in_path {
            enumerator = enumerator.config_name_in_path(name);
        }
        if let Some(roots) = system_roots {
            enumerator = enumerator.system_roots(roots);
        }
        enumerator
    }

    /// Overrides the file name searched in system and user directories.
    #[must_use]
    pub fn config_name(mut self, name: impl Into<String>) -> Self {
        self.config_file_name = name.into();
        self
    }

    /// Overrides the dotfile name searched along the working-directory chain.
    #[must_use]
    pub fn config_name_in_path(mut self, name: impl Into<String>) -> Self {
        self.config_file_name_in_path = name.into();
        self
    }

    /// Reports candidates even when no file exists at the path.
    #[must_use]
    pub fn include_missing(mut self, include: bool) -> Self {
        self.include_missing = include;
        self
    }

    /// Replaces the filesystem used for existence checks.
    #[must_use]
    pub fn with_file_system<F>(mut self, file_system: F) -> Self
    where
        F: FileSystem + 'static,
    {
        self.file_system = Arc::new(file_system);
        self
    }

    /// Replaces the system configuration roots, searched in the given order.
    ///
    /// Defaults to [`platform::DEFAULT_SYSTEM_ROOTS`].
    #[must_use]
    pub fn system_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.system_roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// The application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// File name searched in system and user directories.
    #[must_use]
    pub fn config_file_name(&self) -> &str {
        &self.config_file_name
    }

    /// Dotfile name searched along the working-directory chain.
    #[must_use]
    pub fn config_file_name_in_path(&self) -> &str {
        &self.config_file_name_in_path
    }

    /// Whether missing candidates are reported.
    #[must_use]
    pub const fn includes_missing(&self) -> bool {
        self.include_missing
    }

    /// System configuration roots in search order.
    #[must_use]
    pub fn system_root_dirs(&self) -> &[PathBuf] {
        &self.system_roots
    }
}
