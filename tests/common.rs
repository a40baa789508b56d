//! Test utilities for azp-bump integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Manifest with string version fields, written compactly
pub const SAMPLE_TASK: &str = r#"{"decription":"test","id":"asdf876asdfkasd","name":"test-task","version":{"Major":"0","Minor":"8","Patch":"2"}}"#;

/// Manifest with numeric version fields
pub const NUMERIC_TASK: &str = r#"{"name":"numeric-task","version":{"Major":1,"Minor":2,"Patch":3}}"#;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Writes `content` to `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Creates `tasks/<name>/task.json` for every name
pub fn write_tasks(root: &Path, names: &[&str], content: &str) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| write_file(root, &format!("tasks/{}/task.json", name), content))
        .collect()
}

/// Builds a glob string rooted at `root`
pub fn glob_under(root: &Path, pattern: &str) -> String {
    format!("{}/{}", root.display(), pattern)
}

/// Reads a manifest back as JSON
pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}
