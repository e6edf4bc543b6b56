//! Unified patch export built on a conventional Myers diff
//!
//! The positional summary in [`crate::summarize`] is the dashboard's
//! rendering semantics; this export exists for tooling that expects a
//! git-style patch instead.

use similar::{Algorithm, ChangeTag, TextDiff};

/// Generate a unified patch string (like `git diff`) for one file
///
/// `label` is the file's relative path, used for the `--- a/` / `+++ b/`
/// headers. Identical texts produce just the headers with no change lines.
pub fn unified_patch(original: &str, candidate: &str, label: &str) -> String {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .timeout(std::time::Duration::from_secs(5))
        .diff_lines(original, candidate);

    let mut result = format!("--- a/{label}\n+++ b/{label}\n");

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        result.push_str(sign);
        result.push_str(change.value());
        if change.missing_newline() {
            result.push('\n');
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unified_patch_headers() {
        let patch = unified_patch("a\n", "a\n", "src/f.py");
        assert_eq!(patch, "--- a/src/f.py\n+++ b/src/f.py\n a\n");
    }

    #[test]
    fn test_unified_patch_changes() {
        let patch = unified_patch("a\nb\n", "a\nc\n", "f.py");
        assert_eq!(patch, "--- a/f.py\n+++ b/f.py\n a\n-b\n+c\n");
    }

    #[test]
    fn test_unified_patch_recognizes_insertion() {
        // Unlike the positional summary, Myers keeps shifted lines equal
        let patch = unified_patch("a\nb\n", "x\na\nb\n", "f.py");
        assert_eq!(patch, "--- a/f.py\n+++ b/f.py\n+x\n a\n b\n");
    }
}
