// Line diff core for EVUA
// This crate produces the line-aligned before/after comparison the
// dashboard renders, plus text and unified-patch exports

mod diff_line;
mod patch;
mod summary;

pub mod render;

pub use diff_line::{DiffLine, DiffLineKind};
pub use patch::unified_patch;
pub use summary::{summarize, DiffStats, DiffSummary};
