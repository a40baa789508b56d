//! Glob resolution and the parallel bump pipeline

pub mod executor;
pub mod file_walker;

pub use executor::{BumpEngine, BumpedFileRecord};
pub use file_walker::{FileWalker, FileWalkerError, resolve_glob};
