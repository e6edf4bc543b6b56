//! Directory scanning: the demo's folder-selection surface
//!
//! Walks a directory recursively and produces the flat `PathRecord` list
//! the materializer consumes, with slash-separated paths relative to the
//! scan root. A real deployment receives these records from the browser's
//! folder picker instead.

use std::fs;
use std::path::{Component, Path};

use anyhow::{bail, Context, Result};
use project_tree::PathRecord;

/// The result of a directory scan
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// One record per regular file found, in directory-walk order
    pub records: Vec<PathRecord>,
    /// Entries skipped because their names were not valid UTF-8
    pub skipped: usize,
}

/// Recursively enumerate the files under `root`
///
/// Symlinks are not followed. Entries whose names cannot be represented
/// as UTF-8 are skipped and counted in the outcome rather than failing
/// the scan.
pub fn scan_directory(root: &Path) -> Result<ScanOutcome> {
    let metadata = fs::metadata(root)
        .with_context(|| format!("Failed to read scan root {}", root.display()))?;
    if !metadata.is_dir() {
        bail!("Scan root is not a directory: {}", root.display());
    }

    let mut outcome = ScanOutcome::default();
    walk(root, root, &mut outcome)?;
    Ok(outcome)
}

fn walk(root: &Path, dir: &Path, outcome: &mut ScanOutcome) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat {}", path.display()))?;

        if file_type.is_symlink() {
            continue;
        }

        if file_type.is_dir() {
            walk(root, &path, outcome)?;
            continue;
        }

        let Some(relative) = relative_slash_path(root, &path) else {
            outcome.skipped += 1;
            continue;
        };

        let size = entry
            .metadata()
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .len();

        // Sizes past i64::MAX cannot occur for real files; clamp rather
        // than wrap if the platform reports something absurd
        let size = i64::try_from(size).unwrap_or(i64::MAX);
        outcome.records.push(PathRecord::new(relative, size));
    }

    Ok(())
}

/// Compute the slash-joined path of `path` relative to `root`
///
/// Returns `None` when any component is not valid UTF-8.
fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = pathdiff::diff_paths(path, root)?;

    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_str()?),
            // diff_paths against an ancestor root yields only Normal
            // components; anything else means the entry escaped the root
            _ => return None,
        }
    }

    Some(segments.join("/"))
}
