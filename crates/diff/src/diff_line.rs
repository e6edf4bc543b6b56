use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the classification of a line in the comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffLineKind {
    /// The line is identical at this position in both texts
    #[display(fmt = "Unchanged")]
    Unchanged,

    /// The line exists at this position only in the original text
    #[display(fmt = "Removed")]
    Removed,

    /// The line exists at this position only in the candidate text
    #[display(fmt = "Added")]
    Added,
}

/// One line of the comparison output, carrying its text
///
/// Lines are position-aligned against the two inputs; a changed position
/// produces a `Removed` entry followed by an `Added` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffLine {
    /// Identical at this position in both texts
    Unchanged(String),

    /// Present at this position only in the original
    Removed(String),

    /// Present at this position only in the candidate
    Added(String),
}

impl DiffLine {
    /// The line's text, without any classification marker
    pub fn text(&self) -> &str {
        match self {
            DiffLine::Unchanged(text) | DiffLine::Removed(text) | DiffLine::Added(text) => text,
        }
    }

    /// The line's classification
    pub fn kind(&self) -> DiffLineKind {
        match self {
            DiffLine::Unchanged(_) => DiffLineKind::Unchanged,
            DiffLine::Removed(_) => DiffLineKind::Removed,
            DiffLine::Added(_) => DiffLineKind::Added,
        }
    }

    /// Check if this line represents a change
    pub fn is_change(&self) -> bool {
        !matches!(self, DiffLine::Unchanged(_))
    }
}
