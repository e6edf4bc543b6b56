//! Application state for the project browser and diff panels
//!
//! All UI-facing state lives here explicitly and is passed into the pure
//! core crates as parameters; neither core crate holds globals. The
//! expanded/collapsed set is presentation state, deliberately kept out of
//! the tree itself.

use std::collections::HashSet;

use anyhow::{anyhow, bail, Result};
use line_diff::{summarize, DiffSummary};
use project_tree::{build_tree, Materialized, PathRecord, RejectedRecord, Tree};

/// A loaded project: the materialized tree plus its display label
#[derive(Debug, Clone)]
pub struct Project {
    /// Human-readable root label (the folder name the user picked)
    pub label: String,
    /// The tree and any rejected records
    pub materialized: Materialized,
}

/// Totals for the dashboard header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectTotals {
    /// Number of files in the tree
    pub files: usize,
    /// Number of directories, including the root
    pub directories: usize,
    /// Cumulative size of all files in bytes
    pub total_bytes: u64,
    /// Number of records that failed to materialize
    pub rejected: usize,
}

/// A candidate text prepared for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateExport {
    /// Suggested filename (the selected file's name)
    pub filename: String,
    /// Raw bytes of the candidate text, no added framing
    pub bytes: Vec<u8>,
}

/// Top-level application state
///
/// Owns the loaded project, the selected file path, and the set of
/// expanded directory paths.
#[derive(Debug, Default)]
pub struct Workbench {
    /// The currently loaded project (if any)
    project: Option<Project>,

    /// Selected file path (relative, slash-separated)
    selected: Option<String>,

    /// Expanded directory paths; absent means collapsed
    expanded: HashSet<String>,
}

impl Workbench {
    /// Create an empty workbench with no project loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize and load a project from folder-enumeration records
    ///
    /// Replaces any previously loaded project and clears the selection and
    /// expansion state. The root directory starts expanded.
    pub fn open_project(&mut self, records: &[PathRecord], label: &str) {
        let materialized = build_tree(records, label);

        self.project = Some(Project {
            label: label.to_string(),
            materialized,
        });
        self.selected = None;
        self.expanded = HashSet::from([String::new()]);
    }

    /// Drop the loaded project and all associated state
    #[allow(dead_code)]
    pub fn close_project(&mut self) {
        self.project = None;
        self.selected = None;
        self.expanded.clear();
    }

    /// The loaded project, if any
    pub fn project(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    /// Records rejected while materializing the loaded project
    pub fn rejected(&self) -> &[RejectedRecord] {
        self.project
            .as_ref()
            .map(|p| p.materialized.rejected.as_slice())
            .unwrap_or(&[])
    }

    /// Select a file by its relative path
    ///
    /// The path must resolve to a file node in the loaded tree.
    pub fn select_file(&mut self, path: &str) -> Result<()> {
        let project = self
            .project
            .as_ref()
            .ok_or_else(|| anyhow!("No project loaded"))?;

        let tree = &project.materialized.tree;
        let id = tree
            .find_by_path(path)
            .ok_or_else(|| anyhow!("No such path in project: {path}"))?;

        if !tree.is_file(id) {
            bail!("Not a file: {path}");
        }

        self.selected = Some(path.to_string());
        Ok(())
    }

    /// The currently selected file path
    #[allow(dead_code)]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Toggle a directory's expanded state
    pub fn toggle_expanded(&mut self, path: &str) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_string());
        }
    }

    /// Check whether a directory is expanded
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Compare content for the selected file
    ///
    /// The caller supplies both texts; when no upgraded content exists it
    /// is the caller's policy to echo the original back. The selected
    /// file's path labels the identical-texts notice.
    pub fn diff_selection(&self, original: &str, candidate: &str) -> Result<DiffSummary> {
        let selected = self
            .selected
            .as_deref()
            .ok_or_else(|| anyhow!("No file selected"))?;

        Ok(summarize(original, candidate, selected))
    }

    /// Prepare the candidate text for download
    ///
    /// The export is the candidate string's bytes verbatim; the filename is
    /// the selected file's name.
    pub fn export_candidate(&self, candidate: &str) -> Result<CandidateExport> {
        let selected = self
            .selected
            .as_deref()
            .ok_or_else(|| anyhow!("No file selected"))?;

        let filename = selected
            .rsplit('/')
            .next()
            .unwrap_or(selected)
            .to_string();

        Ok(CandidateExport {
            filename,
            bytes: candidate.as_bytes().to_vec(),
        })
    }

    /// Totals over the loaded project
    pub fn totals(&self) -> Option<ProjectTotals> {
        let project = self.project.as_ref()?;
        let tree = &project.materialized.tree;

        Some(ProjectTotals {
            files: tree.file_count(),
            directories: tree.directory_count(),
            total_bytes: tree.subtree_size(tree.root()),
            rejected: project.materialized.rejected.len(),
        })
    }

    /// Serialize the loaded tree for a rendering surface
    pub fn tree_json(&self) -> Result<String> {
        let project = self
            .project
            .as_ref()
            .ok_or_else(|| anyhow!("No project loaded"))?;

        Ok(serde_json::to_string_pretty(
            &project.materialized.tree.to_view(),
        )?)
    }

    /// Serialize a comparison for a rendering surface
    pub fn diff_json(summary: &DiffSummary) -> Result<String> {
        Ok(serde_json::to_string_pretty(summary)?)
    }
}
