//! Bump option validation
//!
//! Raw options come from library callers, the command line or an options
//! file. Validation never fails: every invalid or missing value falls back to
//! its default.

use crate::types::{IndentSpec, ReleaseType, VersionPropertyType};
use serde::{Deserialize, Serialize};

/// Literal markers selecting a tab indent
const TAB_MARKERS: [&str; 3] = ["\t", "t", "tab"];

/// The only token that selects string-typed version fields
const STRING_VERSION_PROPERTY_TYPE: &str = "string";

/// An indent value as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndentValue {
    /// A numeric indent, possibly fractional or NaN
    Number(f64),
    /// A textual indent such as "tab"
    Text(String),
}

impl From<f64> for IndentValue {
    fn from(value: f64) -> Self {
        IndentValue::Number(value)
    }
}

impl From<u8> for IndentValue {
    fn from(value: u8) -> Self {
        IndentValue::Number(f64::from(value))
    }
}

impl From<&str> for IndentValue {
    fn from(value: &str) -> Self {
        IndentValue::Text(value.to_string())
    }
}

/// Unvalidated bump options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawOptions {
    /// Release type (patch, minor or major)
    #[serde(rename = "type")]
    pub release_type: Option<String>,

    /// Indent for rewritten manifests
    pub indent: Option<IndentValue>,

    /// JSON type of the rewritten version fields
    pub version_property_type: Option<String>,

    /// Suppress progress output
    pub quiet: Option<bool>,
}

impl RawOptions {
    /// Overlays every value set in `other` on top of `self`
    pub fn merge(self, other: RawOptions) -> RawOptions {
        RawOptions {
            release_type: other.release_type.or(self.release_type),
            indent: other.indent.or(self.indent),
            version_property_type: other.version_property_type.or(self.version_property_type),
            quiet: other.quiet.or(self.quiet),
        }
    }
}

/// Validated bump options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpOptions {
    pub release_type: ReleaseType,
    pub indent: IndentSpec,
    pub version_property_type: VersionPropertyType,
    pub quiet: bool,
}

/// Validates raw options, defaulting every invalid or missing value
pub fn validate_options(opts: Option<&RawOptions>) -> BumpOptions {
    let Some(opts) = opts else {
        return BumpOptions::default();
    };

    BumpOptions {
        release_type: validate_release_type(opts.release_type.as_deref()),
        indent: validate_json_indent(opts.indent.as_ref()),
        version_property_type: validate_version_property_type(
            opts.version_property_type.as_deref(),
        ),
        quiet: opts.quiet.unwrap_or(false),
    }
}

/// Resolves a release type, defaulting to patch
pub fn validate_release_type(release_type: Option<&str>) -> ReleaseType {
    match release_type.map(|value| (value, ReleaseType::parse(value))) {
        Some((_, Some(parsed))) => parsed,
        Some((value, None)) => {
            tracing::warn!(value, "unsupported bump type, using patch");
            ReleaseType::default()
        }
        None => ReleaseType::default(),
    }
}

/// Resolves an indent, defaulting to two spaces
///
/// Tab markers select a tab. Any other text, numeric strings included, is
/// rejected. Numbers must lie in 1..=10 and are floored.
pub fn validate_json_indent(indent: Option<&IndentValue>) -> IndentSpec {
    match indent {
        Some(IndentValue::Text(text)) if TAB_MARKERS.contains(&text.as_str()) => IndentSpec::Tab,
        Some(IndentValue::Number(n))
            if *n >= f64::from(IndentSpec::MIN_SPACES)
                && *n <= f64::from(IndentSpec::MAX_SPACES) =>
        {
            // range check above bounds the cast
            IndentSpec::Spaces(n.floor() as u8)
        }
        Some(other) => {
            tracing::warn!(value = ?other, "unsupported indent, using 2 spaces");
            IndentSpec::default()
        }
        None => IndentSpec::default(),
    }
}

/// Resolves the version field type, defaulting to numbers
///
/// Only the exact token "string" is accepted. Everything else, "number"
/// included, takes the default path.
pub fn validate_version_property_type(version_property_type: Option<&str>) -> VersionPropertyType {
    match version_property_type {
        Some(STRING_VERSION_PROPERTY_TYPE) => VersionPropertyType::String,
        _ => VersionPropertyType::Number,
    }
}
