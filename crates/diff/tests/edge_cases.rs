use line_diff::render::{render_lines, render_summary};
use line_diff::{summarize, unified_patch, DiffLine, DiffStats};
use pretty_assertions::assert_eq;

#[test]
fn empty_original_diffs_against_empty_sequence() {
    // An empty string is a valid "no content yet" input: every candidate
    // line shows as added, with no removals.
    let summary = summarize("", "a\nb", "f.py");
    assert_eq!(
        summary.lines(),
        &[
            DiffLine::Added("a".to_string()),
            DiffLine::Added("b".to_string()),
        ]
    );
    assert_eq!(
        summary.stats(),
        DiffStats {
            added: 2,
            removed: 0,
            unchanged: 0,
        }
    );
}

#[test]
fn empty_candidate_removes_every_line() {
    let summary = summarize("a\nb", "", "f.py");
    assert_eq!(
        summary.lines(),
        &[
            DiffLine::Removed("a".to_string()),
            DiffLine::Removed("b".to_string()),
        ]
    );
}

#[test]
fn both_empty_is_identical() {
    assert!(summarize("", "", "f.py").is_identical());
}

#[test]
fn trailing_newline_is_a_real_line() {
    // "a" vs "a\n" differ: the candidate carries a trailing empty line
    let summary = summarize("a", "a\n", "f.py");
    assert_eq!(
        summary.lines(),
        &[
            DiffLine::Unchanged("a".to_string()),
            DiffLine::Added("".to_string()),
        ]
    );
}

#[test]
fn interior_empty_lines_are_preserved() {
    let summary = summarize("a\n\nb", "a\n\nc", "f.py");
    assert_eq!(
        summary.lines(),
        &[
            DiffLine::Unchanged("a".to_string()),
            DiffLine::Unchanged("".to_string()),
            DiffLine::Removed("b".to_string()),
            DiffLine::Added("c".to_string()),
        ]
    );
}

#[test]
fn no_trimming_whitespace_differences_count() {
    let summary = summarize("a ", "a", "f.py");
    assert!(!summary.is_identical());
}

#[test]
fn unicode_lines_compare_whole() {
    let summary = summarize("naïve = True\nπ = 3", "naïve = True\nπ = 3.14159", "f.py");
    assert_eq!(
        summary.lines(),
        &[
            DiffLine::Unchanged("naïve = True".to_string()),
            DiffLine::Removed("π = 3".to_string()),
            DiffLine::Added("π = 3.14159".to_string()),
        ]
    );
}

#[test]
fn rendered_summary_snapshot() {
    let original = "import os\nprint \"scanning\"\nfor i in xrange(10):\n    print i";
    let candidate = "import os\nprint(\"scanning\")\nfor i in range(10):\n    print(i)";

    let summary = summarize(original, candidate, "scan.py");
    insta::assert_snapshot!(render_summary(&summary), @r###"
      import os
    - print "scanning"
    + print("scanning")
    - for i in xrange(10):
    + for i in range(10):
    -     print i
    +     print(i)
    "###);
}

#[test]
fn rendered_notice_snapshot() {
    let summary = summarize("x\n", "x\n", "util.py");
    insta::assert_snapshot!(render_summary(&summary), @"Opened util.py (no changes detected)");
}

#[test]
fn render_lines_matches_summary_rendering() {
    let summary = summarize("a\nb", "a\nc", "f.py");
    assert_eq!(render_summary(&summary), render_lines(summary.lines()));
}

#[test]
fn unified_patch_for_identical_texts_has_only_headers() {
    let patch = unified_patch("", "", "f.py");
    assert_eq!(patch, "--- a/f.py\n+++ b/f.py\n");
}
