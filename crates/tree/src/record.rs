//! Input records and rejection reasons for tree materialization

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One entry from a folder enumeration: a slash-separated relative path
/// plus the file's size in bytes.
///
/// `size` is signed so that an out-of-range value handed over by an
/// external surface stays representable and can be rejected instead of
/// wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathRecord {
    /// Relative path, no leading slash (e.g. `"src/main.py"`)
    pub path: String,
    /// File size in bytes
    pub size: i64,
}

impl PathRecord {
    /// Create a new path record
    pub fn new(path: impl Into<String>, size: i64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    /// Split the path into non-empty segments
    ///
    /// Leading, trailing, and doubled separators are tolerated; only the
    /// non-empty segments between them count.
    pub fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }
}

/// Why a record could not be materialized into the tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RejectReason {
    /// The path had no segments left after separator normalization
    #[error("invalid path: {path:?} is empty after separator normalization")]
    InvalidPath {
        /// The offending path string as supplied
        path: String,
    },

    /// The size was negative
    #[error("invalid size: {size} is not a valid byte count")]
    InvalidSize {
        /// The offending size value
        size: i64,
    },

    /// The record collides with an already materialized node of the
    /// wrong kind, or duplicates an existing file path
    #[error("structural conflict at {path:?}")]
    StructuralConflict {
        /// The normalized path where the collision occurred
        path: String,
    },
}

/// A record that was skipped during materialization, paired with the reason
///
/// Rejections are reported to the caller rather than aborting the build;
/// one malformed record must not prevent the rest of the tree from
/// materializing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RejectedRecord {
    /// The record as it was supplied
    pub record: PathRecord,
    /// Why it was rejected
    pub reason: RejectReason,
}

impl RejectedRecord {
    /// Create a new rejected record
    pub fn new(record: PathRecord, reason: RejectReason) -> Self {
        Self { record, reason }
    }
}
