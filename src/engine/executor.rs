#![forbid(unsafe_code)]

//! Parallel execution engine for bumping task manifest files
//!
//! This module provides the BumpEngine which reads, bumps and rewrites
//! manifest files in parallel using rayon.

use crate::config::options::BumpOptions;
use crate::error::ManifestError;
use crate::manifest::{self, TaskVersion};
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of bumping one manifest file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BumpedFileRecord {
    /// Path of the manifest, as produced by glob resolution
    pub file_path: PathBuf,
    /// Version before the bump, fields as originally written
    pub initial_version: String,
    /// Version after the bump
    pub bumped_version: String,
}

/// Execution engine that bumps manifest files in parallel
///
/// The engine:
/// - Reads every file as UTF-8 and parses it as JSON
/// - Validates and bumps the version block
/// - Writes the manifest back with the configured indent
/// - Stops at the first failure
#[derive(Debug, Clone)]
pub struct BumpEngine {
    options: BumpOptions,
}

impl BumpEngine {
    /// Creates a new BumpEngine with validated options
    pub fn new(options: BumpOptions) -> Self {
        Self { options }
    }

    /// Returns the options the engine was created with
    pub fn options(&self) -> &BumpOptions {
        &self.options
    }

    /// Bump every file in parallel
    ///
    /// # Arguments
    ///
    /// * `files` - Manifest paths to bump
    ///
    /// # Returns
    ///
    /// One record per file in input order, or the first error encountered
    pub fn bump_files(&self, files: &[PathBuf]) -> Result<Vec<BumpedFileRecord>, ManifestError> {
        files.par_iter().map(|file| self.bump_file(file)).collect()
    }

    /// Bump a single manifest file
    ///
    /// This method:
    /// 1. Reads the file content
    /// 2. Parses it as JSON
    /// 3. Extracts and validates the current version
    /// 4. Bumps the version in memory
    /// 5. Writes the manifest back to the same path
    pub fn bump_file(&self, path: &Path) -> Result<BumpedFileRecord, ManifestError> {
        let content = fs::read_to_string(path)?;
        let mut task: Value = serde_json::from_str(&content)?;

        let current = TaskVersion::extract(&task)?;
        let bumped = manifest::bump_version(&mut task, &current, &self.options)?;

        let output = manifest::to_json_string(&task, self.options.indent)?;
        fs::write(path, output)?;

        tracing::debug!(
            file = %path.display(),
            from = %current,
            to = %bumped,
            "bumped manifest"
        );

        Ok(BumpedFileRecord {
            file_path: path.to_path_buf(),
            initial_version: current.to_string(),
            bumped_version: bumped.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IndentSpec, ReleaseType, VersionPropertyType};
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{"decription":"test","id":"asdf876asdfkasd","name":"test-task","version":{"Major":"0","Minor":"8","Patch":"2"}}"#;

    fn write_sample(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, SAMPLE).unwrap();
        path
    }

    #[test]
    fn test_bump_file_default_options() {
        let dir = TempDir::new().unwrap();
        let path = write_sample(&dir, "task.json");

        let engine = BumpEngine::new(BumpOptions::default());
        let record = engine.bump_file(&path).unwrap();

        assert_eq!(record.initial_version, "0.8.2");
        assert_eq!(record.bumped_version, "0.8.3");
        assert_eq!(record.file_path, path);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n  \"decription\": \"test\",\n  \"id\": \"asdf876asdfkasd\",\n  \"name\": \"test-task\",\n  \"version\": {\n    \"Major\": 0,\n    \"Minor\": 8,\n    \"Patch\": 3\n  }\n}"
        );
    }

    #[test]
    fn test_bump_file_with_tab_and_strings() {
        let dir = TempDir::new().unwrap();
        let path = write_sample(&dir, "task.json");

        let engine = BumpEngine::new(BumpOptions {
            release_type: ReleaseType::Major,
            indent: IndentSpec::Tab,
            version_property_type: VersionPropertyType::String,
            quiet: false,
        });
        let record = engine.bump_file(&path).unwrap();
        assert_eq!(record.bumped_version, "1.0.0");

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n\t\"version\": {\n\t\t\"Major\": \"1\""));
    }

    #[test]
    fn test_bump_files_preserves_order() {
        let dir = TempDir::new().unwrap();
        let files: Vec<PathBuf> = (0..8)
            .map(|i| write_sample(&dir, &format!("task{}.json", i)))
            .collect();

        let engine = BumpEngine::new(BumpOptions::default());
        let records = engine.bump_files(&files).unwrap();

        let paths: Vec<PathBuf> = records.into_iter().map(|r| r.file_path).collect();
        assert_eq!(paths, files);
    }

    #[test]
    fn test_bump_file_missing() {
        let dir = TempDir::new().unwrap();
        let engine = BumpEngine::new(BumpOptions::default());
        let result = engine.bump_file(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ManifestError::Io(_))));
    }

    #[test]
    fn test_bump_file_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("task.json");
        fs::write(&path, "{ not json").unwrap();

        let engine = BumpEngine::new(BumpOptions::default());
        let result = engine.bump_file(&path);
        assert!(matches!(result, Err(ManifestError::Parse(_))));

        // file is left untouched
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_bump_files_fails_on_any_invalid_file() {
        let dir = TempDir::new().unwrap();
        let good = write_sample(&dir, "good.json");
        let bad = dir.path().join("bad.json");
        fs::write(&bad, r#"{"version":{"Major":0,"Minor":1,"patch":2}}"#).unwrap();

        let engine = BumpEngine::new(BumpOptions::default());
        let result = engine.bump_files(&[good, bad]);
        assert!(matches!(result, Err(ManifestError::InvalidVersion)));
    }

    #[test]
    fn test_record_serialization() {
        let record = BumpedFileRecord {
            file_path: PathBuf::from("tasks/one/task.json"),
            initial_version: "0.8.2".to_string(),
            bumped_version: "0.8.3".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"filePath":"tasks/one/task.json","initialVersion":"0.8.2","bumpedVersion":"0.8.3"}"#
        );
    }
}
