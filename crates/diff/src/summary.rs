//! Positional line comparison between an original and a candidate text

use crate::diff_line::{DiffLine, DiffLineKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of comparing two texts
///
/// Identical texts produce a single informational notice rather than a
/// line listing; callers must branch on the variant instead of scanning
/// the lines for a sentinel string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffSummary {
    /// The two texts are line-for-line identical
    Identical {
        /// Human-readable notice, e.g. `Opened f.py (no changes detected)`
        notice: String,
    },

    /// The texts differ; the position-aligned line listing
    Changed {
        /// Comparison output in order
        lines: Vec<DiffLine>,
    },
}

/// Line counts over a comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffStats {
    /// Number of added lines
    pub added: usize,
    /// Number of removed lines
    pub removed: usize,
    /// Number of unchanged lines
    pub unchanged: usize,
}

impl DiffSummary {
    /// Check if the texts were identical
    pub fn is_identical(&self) -> bool {
        matches!(self, DiffSummary::Identical { .. })
    }

    /// The comparison lines (empty for identical texts)
    pub fn lines(&self) -> &[DiffLine] {
        match self {
            DiffSummary::Identical { .. } => &[],
            DiffSummary::Changed { lines } => lines,
        }
    }

    /// Count lines by classification
    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        for line in self.lines() {
            match line.kind() {
                DiffLineKind::Added => stats.added += 1,
                DiffLineKind::Removed => stats.removed += 1,
                DiffLineKind::Unchanged => stats.unchanged += 1,
            }
        }
        stats
    }
}

/// Split a text into its line sequence
///
/// Splitting is on `\n` with no trimming, so a terminal newline yields a
/// trailing empty line. The empty string is the empty sequence, matching
/// the "no content yet" case rather than a one-empty-line document.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').collect()
}

/// Compare two texts position by position
///
/// If the two line sequences are element-wise identical the result is
/// [`DiffSummary::Identical`] with the notice
/// `Opened <label> (no changes detected)`. Otherwise each index up to the
/// longer sequence's length yields: one `Unchanged` when both sides hold
/// the same line, else a `Removed` for the original's line (when present)
/// followed by an `Added` for the candidate's (when present).
///
/// This is an index-aligned comparison, not an LCS diff: a single inserted
/// or deleted line shifts every later position into a removed/added pair.
/// That is the intended rendering semantics for the side-by-side panels;
/// use [`crate::unified_patch`] when a conventional diff is wanted.
///
/// Pure and deterministic: no error conditions exist for string inputs,
/// and identical inputs always reproduce identical output.
pub fn summarize(original: &str, candidate: &str, label: &str) -> DiffSummary {
    let old_lines = split_lines(original);
    let new_lines = split_lines(candidate);

    if old_lines == new_lines {
        return DiffSummary::Identical {
            notice: format!("Opened {label} (no changes detected)"),
        };
    }

    let count = old_lines.len().max(new_lines.len());
    let mut lines = Vec::with_capacity(count);

    for i in 0..count {
        let old = old_lines.get(i);
        let new = new_lines.get(i);

        match (old, new) {
            (Some(&l), Some(&r)) if l == r => {
                lines.push(DiffLine::Unchanged(l.to_string()));
            }
            _ => {
                if let Some(&l) = old {
                    lines.push(DiffLine::Removed(l.to_string()));
                }
                if let Some(&r) = new {
                    lines.push(DiffLine::Added(r.to_string()));
                }
            }
        }
    }

    DiffSummary::Changed { lines }
}
