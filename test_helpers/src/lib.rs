//! Test helpers shared across the enumconf workspace.
//!
//! - [`env`] serialises environment mutation and restores prior values.
//! - [`cwd`] serialises working-directory changes and restores the original.
//! - [`tree`] builds throwaway directory trees of configuration files.

pub mod cwd;
pub mod env;
pub mod tree;
