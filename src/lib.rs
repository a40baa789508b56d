#![forbid(unsafe_code)]

//! azp-bump: version bumping for Azure Pipelines task manifests
//!
//! Task manifests (`task.json`) carry their version as an object with
//! `Major`, `Minor` and `Patch` fields. This crate bumps those fields for
//! every manifest matched by a set of glob patterns, or for manifests that
//! are already parsed.

pub mod bump;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod manifest;
pub mod output;
pub mod types;

// Re-export the bump operations for convenient access
pub use bump::{BumpSummary, bump_task, bump_task_manifest_files, bump_tasks};
pub use engine::BumpedFileRecord;

// Re-export error types for convenient access
pub use error::{BumpError, ConfigError, ManifestError};

// Re-export option and domain types for convenient access
pub use config::{BumpOptions, IndentValue, RawOptions};
pub use types::{GlobPattern, IndentSpec, ReleaseType, VersionPropertyType};
