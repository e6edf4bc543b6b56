//! Source-language detection and Python 2 triage heuristics
//!
//! Mirrors the upgrade pipeline's intake step: decide which files are
//! candidates for conversion at all, and flag the Python sources that
//! still carry Python 2 constructs.

use std::path::Path;

/// Languages the upgrade pipeline knows how to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Python,
    JavaScript,
}

impl Language {
    /// Detect the language from a file path's extension
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "py" => Some(Language::Python),
            "js" => Some(Language::JavaScript),
            _ => None,
        }
    }
}

/// Check whether Python source still carries Python 2 constructs
///
/// A cheap marker scan, not a parse: any line containing a `print`
/// statement, `xrange`, or `raw_input(` flags the file. False positives
/// (e.g. markers inside string literals) are acceptable for triage.
pub fn needs_python2_upgrade(source: &str) -> bool {
    source
        .lines()
        .any(|line| line.contains("print ") || line.contains("xrange") || line.contains("raw_input("))
}

/// One-character indicator for tree listings
///
/// `!` marks a flagged file, a space anything else.
pub fn marker(flagged: bool) -> char {
    if flagged {
        '!'
    } else {
        ' '
    }
}
