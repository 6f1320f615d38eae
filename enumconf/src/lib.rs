//! Enumerates the configuration file paths relevant to an application.
//!
//! An [`Enumerator`] searches three families of locations and returns the
//! candidate paths in load order, least specific first:
//!
//! 1. system roots such as `/etc/<app>/<app>.conf`;
//! 2. the user configuration directory, e.g.
//!    `$XDG_CONFIG_HOME/<app>/<app>.conf`;
//! 3. every directory from the filesystem root down to the working directory,
//!    looking for a dotfile named `.<app>`.
//!
//! The crate never opens or parses the files it reports. Callers load the
//! returned paths in order so later, more specific files override earlier
//! ones.
//!
//! ```rust
//! use std::path::Path;
//!
//! use enumconf::{Enumerator, MemoryFileSystem};
//!
//! let fs = MemoryFileSystem::new().with_file("/srv/project/.demo");
//! let enumerator = Enumerator::new("demo")
//!     .system_roots(["/etc"])
//!     .with_file_system(fs);
//!
//! assert!(enumerator.enumerate_system().is_empty());
//! assert_eq!(
//!     enumerator.enumerate_path_from("/srv/project/src"),
//!     vec![Path::new("/srv/project").join(".demo")],
//! );
//! ```

mod candidate;
mod enumerator;
mod error;
pub mod fs;
mod options;
pub mod platform;

pub use candidate::{Candidate, Source};
pub use enumerator::Enumerator;
pub use error::{EnumConfError, EnumConfResult};
pub use fs::{EntryKind, FileSystem, MemoryFileSystem, RealFileSystem};
pub use options::EnumeratorOptions;
