#![forbid(unsafe_code)]

//! Core domain types for azp-bump
//!
//! This module defines the small value types shared by option validation,
//! the version bumper and the file pipeline.

use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The version component selected for a bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    #[default]
    Patch,
    Minor,
    Major,
}

impl ReleaseType {
    /// Parses a release type, ignoring ASCII case
    ///
    /// Returns None for anything other than patch, minor or major.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("patch") {
            Some(ReleaseType::Patch)
        } else if value.eq_ignore_ascii_case("minor") {
            Some(ReleaseType::Minor)
        } else if value.eq_ignore_ascii_case("major") {
            Some(ReleaseType::Major)
        } else {
            None
        }
    }

    /// Returns the lowercase name of the release type
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Patch => "patch",
            ReleaseType::Minor => "minor",
            ReleaseType::Major => "major",
        }
    }

    /// Applies the increment to a version, resetting lower components:
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    pub fn apply(&self, version: &Version) -> Version {
        match self {
            ReleaseType::Major => Version::new(version.major + 1, 0, 0),
            ReleaseType::Minor => Version::new(version.major, version.minor + 1, 0),
            ReleaseType::Patch => Version::new(version.major, version.minor, version.patch + 1),
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indentation used when writing manifests back to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndentSpec {
    /// Between 1 and 10 spaces per level
    Spaces(u8),
    /// One tab character per level
    Tab,
}

impl IndentSpec {
    pub const MIN_SPACES: u8 = 1;
    pub const MAX_SPACES: u8 = 10;

    /// Returns the string written once per nesting level
    pub fn unit(&self) -> String {
        match self {
            IndentSpec::Spaces(n) => " ".repeat(usize::from(*n)),
            IndentSpec::Tab => "\t".to_string(),
        }
    }
}

impl Default for IndentSpec {
    fn default() -> Self {
        IndentSpec::Spaces(2)
    }
}

impl fmt::Display for IndentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentSpec::Spaces(n) => write!(f, "{} spaces", n),
            IndentSpec::Tab => f.write_str("tab"),
        }
    }
}

/// JSON type written into the Major, Minor and Patch fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionPropertyType {
    #[default]
    Number,
    String,
}

impl fmt::Display for VersionPropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionPropertyType::Number => f.write_str("number"),
            VersionPropertyType::String => f.write_str("string"),
        }
    }
}

/// A glob pattern identifying task manifest files
///
/// Patterns are compiled with `globset`; `*` stays inside one path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobPattern(String);

impl GlobPattern {
    /// Creates a new GlobPattern
    pub fn new(pattern: impl Into<String>) -> Self {
        GlobPattern(pattern.into())
    }

    /// Returns the pattern as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GlobPattern {
    fn from(pattern: String) -> Self {
        GlobPattern(pattern)
    }
}

impl From<&str> for GlobPattern {
    fn from(pattern: &str) -> Self {
        GlobPattern(pattern.to_string())
    }
}
