#![forbid(unsafe_code)]

//! Task manifest version access
//!
//! Manifests are handled as untyped JSON documents. The only part azp-bump
//! relies on is the `version` object, which is read through the validated
//! [`TaskVersion`] view and rewritten by [`bump_version`].

use crate::config::options::BumpOptions;
use crate::error::ManifestError;
use crate::types::{IndentSpec, VersionPropertyType};
use semver::Version;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use std::fmt;

const VERSION_KEY: &str = "version";
const MAJOR_KEY: &str = "Major";
const MINOR_KEY: &str = "Minor";
const PATCH_KEY: &str = "Patch";

/// Largest integer a version field may hold (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// One validated version field
#[derive(Debug, Clone, PartialEq, Eq)]
struct VersionField {
    /// Field as written in the manifest, e.g. `"007"` or `2`
    raw: String,
}

impl VersionField {
    fn parse(value: Option<&Value>) -> Result<Self, ManifestError> {
        let value = value.ok_or(ManifestError::InvalidVersion)?;
        let number = coerce_number(value).ok_or(ManifestError::InvalidVersion)?;

        if !number.is_finite() || number.fract() != 0.0 || number < 0.0 || number > MAX_SAFE_INTEGER {
            return Err(ManifestError::InvalidVersion);
        }

        Ok(Self {
            raw: raw_representation(value),
        })
    }
}

/// The Major, Minor and Patch fields of a task manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskVersion {
    major: VersionField,
    minor: VersionField,
    patch: VersionField,
}

impl TaskVersion {
    /// Extracts and validates the version block of a task manifest
    ///
    /// Each field must be a JSON number or numeric string holding a
    /// non-negative whole number; empty strings are rejected.
    pub fn extract(task: &Value) -> Result<Self, ManifestError> {
        let version = task
            .get(VERSION_KEY)
            .and_then(Value::as_object)
            .ok_or(ManifestError::InvalidVersion)?;

        Ok(Self {
            major: VersionField::parse(version.get(MAJOR_KEY))?,
            minor: VersionField::parse(version.get(MINOR_KEY))?,
            patch: VersionField::parse(version.get(PATCH_KEY))?,
        })
    }

    /// Parses the fields, as written, into a semantic version
    ///
    /// Numeric forms that are not canonical semver components (`"007"`,
    /// `"1e2"`, `" 3 "`, `"0x10"`) are rejected.
    pub fn to_semver(&self) -> Result<Version, ManifestError> {
        let version = self.to_string();
        Version::parse(&version).map_err(|source| ManifestError::InvalidSemver { version, source })
    }
}

/// Formats the fields as originally written, joined with dots
impl fmt::Display for TaskVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major.raw, self.minor.raw, self.patch.raw)
    }
}

/// Bumps the version block of `task` in place and returns the new version
///
/// `current` must have been extracted from the same document.
pub fn bump_version(
    task: &mut Value,
    current: &TaskVersion,
    opts: &BumpOptions,
) -> Result<Version, ManifestError> {
    let bumped = opts.release_type.apply(&current.to_semver()?);

    let version = task
        .get_mut(VERSION_KEY)
        .and_then(Value::as_object_mut)
        .ok_or(ManifestError::InvalidVersion)?;

    write_field(version, MAJOR_KEY, bumped.major, opts.version_property_type);
    write_field(version, MINOR_KEY, bumped.minor, opts.version_property_type);
    write_field(version, PATCH_KEY, bumped.patch, opts.version_property_type);

    Ok(bumped)
}

fn write_field(version: &mut Map<String, Value>, key: &str, value: u64, ty: VersionPropertyType) {
    let value = match ty {
        VersionPropertyType::Number => Value::from(value),
        VersionPropertyType::String => Value::String(value.to_string()),
    };
    version.insert(key.to_string(), value);
}

/// Serializes a manifest with the given indent
///
/// Output has no trailing newline.
pub fn to_json_string(task: &Value, indent: IndentSpec) -> Result<String, ManifestError> {
    let unit = indent.unit();
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(unit.as_bytes()));
    task.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Numeric value of a version field, following JavaScript `Number()`
///
/// Only numbers and strings are considered; any other JSON type is invalid.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => parse_js_number(s),
        _ => None,
    }
}

fn parse_js_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    // f64::from_str also accepts "inf" and "nan", which Number() does not
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return None;
    }

    trimmed.parse::<f64>().ok()
}

fn raw_representation(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match (n.as_u64(), n.as_f64()) {
            (Some(u), _) => u.to_string(),
            (None, Some(f)) if f == 0.0 => "0".to_string(),
            (None, Some(f)) => f.to_string(),
            (None, None) => n.to_string(),
        },
        other => other.to_string(),
    }
}
