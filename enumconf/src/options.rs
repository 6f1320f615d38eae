//! Serialisable enumerator settings.
//!
//! Applications that already layer their configuration with `figment` can
//! carry discovery settings alongside everything else and build an
//! [`Enumerator`] from them in one step.

use std::path::PathBuf;

use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::enumerator::Enumerator;
use crate::error::EnumConfResult;

/// Settings accepted by [`Enumerator::from_options`].
///
/// Only `app_name` is required. Absent fields keep the defaults chosen by
/// [`Enumerator::new`].
///
/// # Examples
///
/// ```rust
/// use enumconf::EnumeratorOptions;
/// use figment::{Figment, providers::Serialized};
///
/// let figment = Figment::from(Serialized::defaults(EnumeratorOptions::new("demo")))
///     .merge(("include_missing", true));
/// let options = EnumeratorOptions::from_figment(&figment)?;
/// assert!(options.include_missing);
/// let enumerator = options.into_enumerator();
/// assert_eq!(enumerator.config_file_name(), "demo.conf");
/// # Ok::<(), enumconf::EnumConfError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumeratorOptions {
    /// Application name; a single path segment.
    pub app_name: String,
    /// File name searched in system and user directories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_file_name: Option<String>,
    /// Dotfile name searched along the working-directory chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_file_name_in_path: Option<String>,
    /// Report candidates even when nothing exists at the path.
    #[serde(default)]
    pub include_missing: bool,
    /// Replacement system configuration roots, in search order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_roots: Option<Vec<PathBuf>>,
}

impl EnumeratorOptions {
    /// Creates options for `app_name` with every other field unset.
    #[must_use]
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            config_file_name: None,
            config_file_name_in_path: None,
            include_missing: false,
            system_roots: None,
        }
    }

    /// Extracts options from the root of `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EnumConfError::Options`] when the merged sources do
    /// not describe valid options, for example when `app_name` is missing.
    pub fn from_figment(figment: &Figment) -> EnumConfResult<Self> {
        Ok(figment.extract()?)
    }

    /// Extracts options nested under `key`, such as a `discovery` table in a
    /// larger application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EnumConfError::Options`] when `key` is absent or its
    /// value does not describe valid options.
    pub fn from_figment_section(figment: &Figment, key: &str) -> EnumConfResult<Self> {
        Ok(figment.extract_inner(key)?)
    }

    /// Builds an [`Enumerator`] using the real filesystem.
    #[must_use]
    pub fn into_enumerator(self) -> Enumerator {
        Enumerator::from_options(self)
    }
}
