//! Glob resolution for task manifest files
//!
//! A pattern is resolved by walking its longest literal directory prefix and
//! keeping the regular files the compiled glob matches. Results are sorted.

use crate::types::GlobPattern;
use globset::{GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during glob resolution
#[derive(Debug, Error)]
pub enum FileWalkerError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

const GLOB_META: [char; 4] = ['*', '?', '[', '{'];

/// Resolves a single glob pattern to the files it matches
pub struct FileWalker {
    pattern: GlobPattern,
    matcher: GlobMatcher,
    root: PathBuf,
    /// True when the pattern had no literal prefix and the walk starts at "."
    implicit_root: bool,
    /// False when a wildcard component names dot entries explicitly, e.g. `.*`
    skip_hidden: bool,
    max_depth: Option<usize>,
}

impl FileWalker {
    /// Creates a new FileWalker
    ///
    /// # Arguments
    /// * `pattern` - Glob pattern; `*` stays within one path component, `**` spans several
    ///
    /// # Returns
    /// A FileWalker ready to resolve the pattern
    pub fn new(pattern: &GlobPattern) -> Result<Self, FileWalkerError> {
        let matcher = GlobBuilder::new(pattern.as_str())
            .literal_separator(true)
            .build()
            .map_err(|e| FileWalkerError::InvalidGlob {
                pattern: pattern.as_str().to_string(),
                source: e,
            })?
            .compile_matcher();

        let (root, remaining) = split_literal_prefix(pattern.as_str());
        let implicit_root = root.as_os_str().is_empty();
        let root = if implicit_root { PathBuf::from(".") } else { root };

        let max_depth = if remaining.iter().any(|c| c.contains("**")) {
            None
        } else {
            Some(remaining.len())
        };
        let skip_hidden = !remaining.iter().any(|c| c.starts_with('.'));

        Ok(Self {
            pattern: pattern.clone(),
            matcher,
            root,
            implicit_root,
            skip_hidden,
            max_depth,
        })
    }

    /// Returns the directory (or file) the walk starts from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walks the literal prefix and returns an iterator over matching files
    pub fn walk(self) -> impl Iterator<Item = Result<PathBuf, FileWalkerError>> {
        let exists = self.root.symlink_metadata().is_ok();

        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            // wildcards do not match dot entries below the literal prefix
            .hidden(self.skip_hidden)
            .max_depth(self.max_depth)
            .build();

        let matcher = self.matcher;
        let implicit_root = self.implicit_root;

        walker
            .take_while(move |_| exists)
            .filter_map(move |result| match result {
                Ok(entry) => {
                    let is_file = match entry.file_type() {
                        // links are matched by their target
                        Some(ft) if ft.is_symlink() => entry.path().is_file(),
                        Some(ft) => ft.is_file(),
                        None => false,
                    };
                    if !is_file {
                        return None;
                    }

                    let path = if implicit_root {
                        entry.path().strip_prefix(".").unwrap_or(entry.path())
                    } else {
                        entry.path()
                    };

                    if matcher.is_match(path) {
                        Some(Ok(path.to_path_buf()))
                    } else {
                        None
                    }
                }
                Err(e) if error_depth(&e).is_some_and(|depth| depth > 0) => {
                    tracing::warn!(error = %e, "skipping unreadable entry");
                    None
                }
                Err(e) => Some(Err(FileWalkerError::Walk(e))),
            })
    }

    /// Collects every matching file, sorted
    ///
    /// A literal prefix that does not exist resolves to an empty list.
    pub fn resolve(self) -> Result<Vec<PathBuf>, FileWalkerError> {
        let pattern = self.pattern.clone();
        let mut paths = self.walk().collect::<Result<Vec<_>, _>>()?;
        paths.sort();

        tracing::debug!(pattern = %pattern, matches = paths.len(), "resolved glob");
        Ok(paths)
    }
}

impl std::fmt::Debug for FileWalker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWalker")
            .field("pattern", &self.pattern)
            .field("root", &self.root)
            .field("skip_hidden", &self.skip_hidden)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

/// Resolves a glob pattern to a sorted list of matching files
pub fn resolve_glob(pattern: &GlobPattern) -> Result<Vec<PathBuf>, FileWalkerError> {
    FileWalker::new(pattern)?.resolve()
}

/// Depth at which a walk error occurred, if recorded
fn error_depth(err: &ignore::Error) -> Option<usize> {
    match err {
        ignore::Error::WithDepth { depth, .. } => Some(*depth),
        ignore::Error::WithPath { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_depth(err)
        }
        _ => None,
    }
}

/// Splits a pattern into its literal leading path and the remaining components
///
/// When the whole pattern is literal the returned path is the full pattern.
fn split_literal_prefix(pattern: &str) -> (PathBuf, Vec<&str>) {
    let mut root = PathBuf::new();
    if pattern.starts_with('/') {
        root.push("/");
    }

    let components: Vec<&str> = pattern.split('/').filter(|c| !c.is_empty()).collect();
    let literal = components
        .iter()
        .take_while(|c| !c.contains(GLOB_META))
        .count();

    for component in &components[..literal] {
        root.push(component);
    }

    (root, components[literal..].to_vec())
}
