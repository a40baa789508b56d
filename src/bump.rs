//! Top-level bump operations
//!
//! [`bump_task_manifest_files`] drives the file-based pipeline for a list of
//! glob patterns. [`bump_task`] and [`bump_tasks`] bump already-parsed
//! manifests in memory.

use crate::config::options::{self, BumpOptions, RawOptions};
use crate::engine::executor::{BumpEngine, BumpedFileRecord};
use crate::engine::file_walker::resolve_glob;
use crate::error::{BumpError, ManifestError};
use crate::manifest::{self, TaskVersion};
use crate::types::{GlobPattern, ReleaseType};
use rayon::prelude::*;
use semver::Version;
use serde::Serialize;
use serde_json::Value;

/// Aggregate result of one file-based bump
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BumpSummary {
    /// Release type that was applied
    #[serde(rename = "bumpType")]
    pub release_type: ReleaseType,
    /// One record per bumped file, grouped by pattern in input order
    #[serde(rename = "bumpedFiles")]
    pub bumped_files: Vec<BumpedFileRecord>,
}

/// Bumps the versions of every task manifest matched by `file_globs`
///
/// Patterns are resolved and processed in parallel. Any failure aborts the
/// whole batch and is reported as [`BumpError::Fatal`]; an empty pattern list
/// is reported as [`BumpError::InvalidArguments`] before any I/O.
///
/// # Example
/// ```no_run
/// let summary = azp_bump::bump_task_manifest_files(&["tasks/**/task.json"], None)?;
/// for file in &summary.bumped_files {
///     println!("{} -> {}", file.initial_version, file.bumped_version);
/// }
/// # Ok::<(), azp_bump::BumpError>(())
/// ```
pub fn bump_task_manifest_files<S>(
    file_globs: &[S],
    opts: Option<&RawOptions>,
) -> Result<BumpSummary, BumpError>
where
    S: AsRef<str> + Sync,
{
    if file_globs.is_empty() {
        return Err(BumpError::InvalidArguments);
    }

    let options = options::validate_options(opts);
    tracing::debug!(?options, patterns = file_globs.len(), "bumping task manifests");

    bump_globs(file_globs, options).map_err(BumpError::fatal)
}

fn bump_globs<S>(file_globs: &[S], options: BumpOptions) -> Result<BumpSummary, BumpError>
where
    S: AsRef<str> + Sync,
{
    let engine = BumpEngine::new(options);

    let per_glob = file_globs
        .par_iter()
        .map(|glob| -> Result<Vec<BumpedFileRecord>, BumpError> {
            let paths = resolve_glob(&GlobPattern::new(glob.as_ref()))?;
            Ok(engine.bump_files(&paths)?)
        })
        .collect::<Result<Vec<Vec<BumpedFileRecord>>, BumpError>>()?;

    Ok(BumpSummary {
        release_type: options.release_type,
        bumped_files: per_glob.into_iter().flatten().collect(),
    })
}

/// Bumps a parsed task manifest in place
///
/// An absent or unrecognised `bump_type` bumps the patch version. Version
/// fields are written back as numbers.
pub fn bump_task(task: &mut Value, bump_type: Option<&str>) -> Result<Version, BumpError> {
    let options = in_memory_options(bump_type);
    let current = TaskVersion::extract(task)?;
    Ok(manifest::bump_version(task, &current, &options)?)
}

/// Bumps every task manifest of a JSON array in place
///
/// All elements are validated before any of them is modified.
pub fn bump_tasks(tasks: &mut Value, bump_type: Option<&str>) -> Result<Vec<Version>, BumpError> {
    let tasks = tasks.as_array_mut().ok_or(BumpError::InvalidTasks)?;
    let options = in_memory_options(bump_type);

    let versions = tasks
        .iter()
        .map(|task| {
            let current = TaskVersion::extract(task)?;
            current.to_semver()?;
            Ok(current)
        })
        .collect::<Result<Vec<_>, ManifestError>>()?;

    tasks
        .iter_mut()
        .zip(&versions)
        .map(|(task, current)| {
            manifest::bump_version(task, current, &options).map_err(BumpError::from)
        })
        .collect()
}

fn in_memory_options(bump_type: Option<&str>) -> BumpOptions {
    BumpOptions {
        release_type: options::validate_release_type(bump_type),
        ..BumpOptions::default()
    }
}
