//! Error type reported by the diagnostic and options APIs.
//!
//! Enumeration itself never fails: every problem degrades to an omitted
//! candidate. These errors surface only where a caller explicitly asks why
//! the environment could not be resolved, or when extracting
//! [`crate::EnumeratorOptions`] from a configuration source.

use thiserror::Error;

/// Errors produced while resolving the discovery environment.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnumConfError {
    /// The platform offers no per-user configuration directory.
    #[error("no user configuration directory is available on this platform")]
    UserConfigDirUnavailable,

    /// The process working directory could not be determined.
    #[error("failed to determine the working directory: {source}")]
    WorkingDir {
        /// Underlying error reported by the operating system.
        #[source]
        source: std::io::Error,
    },

    /// Enumerator options could not be extracted from a configuration source.
    #[error("invalid enumerator options: {0}")]
    Options(#[from] Box<figment::Error>),
}

/// Convenience alias for results carrying an [`EnumConfError`].
pub type EnumConfResult<T> = Result<T, EnumConfError>;

impl From<figment::Error> for EnumConfError {
    fn from(err: figment::Error) -> Self {
        Self::Options(Box::new(err))
    }
}
