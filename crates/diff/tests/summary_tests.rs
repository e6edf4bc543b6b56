use line_diff::{summarize, DiffLine, DiffSummary};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn unchanged(text: &str) -> DiffLine {
    DiffLine::Unchanged(text.to_string())
}

fn removed(text: &str) -> DiffLine {
    DiffLine::Removed(text.to_string())
}

fn added(text: &str) -> DiffLine {
    DiffLine::Added(text.to_string())
}

#[test]
fn identical_texts_yield_notice_not_lines() {
    let summary = summarize("x\ny", "x\ny", "f.py");
    assert_eq!(
        summary,
        DiffSummary::Identical {
            notice: "Opened f.py (no changes detected)".to_string()
        }
    );
}

#[test]
fn changed_line_becomes_removed_then_added() {
    let summary = summarize("a\nb", "a\nc", "f.py");
    assert_eq!(
        summary.lines(),
        &[unchanged("a"), removed("b"), added("c")]
    );
}

#[test]
fn missing_original_line_produces_no_removed() {
    let summary = summarize("a", "a\nb", "f.py");
    assert_eq!(summary.lines(), &[unchanged("a"), added("b")]);
}

#[test]
fn missing_candidate_line_produces_no_added() {
    let summary = summarize("a\nb", "a", "f.py");
    assert_eq!(summary.lines(), &[unchanged("a"), removed("b")]);
}

#[test]
fn comparison_is_positional_not_lcs() {
    // Inserting a line at the top shifts every later position into a
    // removed/added pair; nothing is recognized as merely moved.
    let summary = summarize("a\nb", "x\na\nb", "f.py");
    assert_eq!(
        summary.lines(),
        &[
            removed("a"),
            added("x"),
            removed("b"),
            added("a"),
            added("b"),
        ]
    );
}

#[test]
fn removed_comes_before_added_at_same_index() {
    let summary = summarize("old", "new", "f.py");
    assert_eq!(summary.lines(), &[removed("old"), added("new")]);
}

#[test]
fn label_flows_into_the_notice() {
    let summary = summarize("", "", "src/deep/util.py");
    assert_eq!(
        summary,
        DiffSummary::Identical {
            notice: "Opened src/deep/util.py (no changes detected)".to_string()
        }
    );
}

proptest! {
    /// Swapping the arguments turns every Removed into Added and vice
    /// versa, with Unchanged entries unaffected.
    #[test]
    fn swap_symmetry(
        original in "[a-c\n]{0,30}",
        candidate in "[a-c\n]{0,30}",
    ) {
        let forward = summarize(&original, &candidate, "f.py");
        let backward = summarize(&candidate, &original, "f.py");

        prop_assert_eq!(forward.is_identical(), backward.is_identical());

        let flipped: Vec<DiffLine> = forward
            .lines()
            .iter()
            .map(|line| match line {
                DiffLine::Unchanged(t) => DiffLine::Unchanged(t.clone()),
                DiffLine::Removed(t) => DiffLine::Added(t.clone()),
                DiffLine::Added(t) => DiffLine::Removed(t.clone()),
            })
            .collect();

        // Per-index, the backward run emits its Removed before its Added,
        // so compare as multisets per position group: counts must agree.
        let count = |lines: &[DiffLine]| {
            let mut added = 0usize;
            let mut removed = 0usize;
            let mut same = 0usize;
            for l in lines {
                match l {
                    DiffLine::Added(_) => added += 1,
                    DiffLine::Removed(_) => removed += 1,
                    DiffLine::Unchanged(_) => same += 1,
                }
            }
            (added, removed, same)
        };
        prop_assert_eq!(count(&flipped), count(backward.lines()));

        // And the texts carried by each class match exactly
        let texts = |lines: &[DiffLine], keep: fn(&DiffLine) -> bool| -> Vec<String> {
            lines.iter().filter(|l| keep(l)).map(|l| l.text().to_string()).collect()
        };
        prop_assert_eq!(
            texts(&flipped, |l| matches!(l, DiffLine::Added(_))),
            texts(backward.lines(), |l| matches!(l, DiffLine::Added(_)))
        );
        prop_assert_eq!(
            texts(&flipped, |l| matches!(l, DiffLine::Removed(_))),
            texts(backward.lines(), |l| matches!(l, DiffLine::Removed(_)))
        );
        prop_assert_eq!(
            texts(&flipped, |l| matches!(l, DiffLine::Unchanged(_))),
            texts(backward.lines(), |l| matches!(l, DiffLine::Unchanged(_)))
        );
    }

    /// Summarizing is idempotent: same inputs, same output.
    #[test]
    fn deterministic(
        original in "[a-c\n]{0,30}",
        candidate in "[a-c\n]{0,30}",
    ) {
        prop_assert_eq!(
            summarize(&original, &candidate, "f.py"),
            summarize(&original, &candidate, "f.py")
        );
    }
}
