//! Error types for azp-bump
//!
//! This module defines the error types used throughout azp-bump, following
//! a hierarchical structure: per-file manifest errors, options-file errors,
//! and the top-level error returned by the bump operations.

use crate::engine::file_walker::FileWalkerError;

/// Message used when a manifest does not carry a usable version block
pub const INVALID_TASK_MESSAGE: &str = "Encountered one or more invalid tasks. Task must represent version as an object under the 'version' key with Major, Minor, and Patch fields (that start with Uppercase letters)";

/// Placeholder used when an underlying error has no message
pub const UNKNOWN_DETAILS: &str = "unknown";

/// Errors raised while bumping a single manifest
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// Missing or invalid Major, Minor or Patch field
    #[error("{}", INVALID_TASK_MESSAGE)]
    InvalidVersion,

    /// Numeric fields that do not join into a semantic version, e.g. `007`
    #[error("Invalid Version: {version}. {source}")]
    InvalidSemver {
        version: String,
        #[source]
        source: semver::Error,
    },

    /// Manifest content is not valid JSON
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// Reading or writing the manifest failed
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Options file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Options file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Options file is not valid TOML or has the wrong shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level error type for azp-bump
#[derive(Debug, thiserror::Error)]
pub enum BumpError {
    /// No glob patterns were supplied
    #[error("Invalid arguments. Valid array of glob of task manifests must be specified")]
    InvalidArguments,

    /// The in-memory batch bump was not given an array
    #[error("Invalid argument. First parameter must be valid array of tasks.")]
    InvalidTasks,

    /// Glob pattern could not be matched
    #[error("Failed to match glob. Error details: {}", details_or_unknown(.0))]
    GlobMatch(#[source] FileWalkerError),

    /// Manifest read, parse, validation or write failure
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Any failure below the file-based entry point, with its original cause
    #[error("Fatal error occurred while attempting to bump file. Details: {details}")]
    Fatal {
        details: String,
        #[source]
        source: Box<BumpError>,
    },
}

impl BumpError {
    /// Wraps an error with the fatal prefix used by the file-based entry point
    pub fn fatal(inner: BumpError) -> Self {
        BumpError::Fatal {
            details: details_or_unknown(&inner),
            source: Box::new(inner),
        }
    }
}

impl From<FileWalkerError> for BumpError {
    fn from(err: FileWalkerError) -> Self {
        BumpError::GlobMatch(err)
    }
}

/// Renders an error message, substituting a placeholder for empty messages
pub fn details_or_unknown(err: &dyn std::fmt::Display) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        UNKNOWN_DETAILS.to_string()
    } else {
        message
    }
}
