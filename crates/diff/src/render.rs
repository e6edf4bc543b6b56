//! Plain-text rendering of comparison output

use crate::diff_line::DiffLine;
use crate::summary::DiffSummary;

/// Render comparison lines as a text block
///
/// Each line is prefixed with its classification marker: two spaces for
/// unchanged, `- ` for removed, `+ ` for added. Lines are joined with
/// newlines, without a trailing one.
pub fn render_lines(lines: &[DiffLine]) -> String {
    let mut out = String::new();

    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let sign = match line {
            DiffLine::Unchanged(_) => "  ",
            DiffLine::Removed(_) => "- ",
            DiffLine::Added(_) => "+ ",
        };
        out.push_str(sign);
        out.push_str(line.text());
    }

    out
}

/// Render a whole summary, including the identical-texts notice
pub fn render_summary(summary: &DiffSummary) -> String {
    match summary {
        DiffSummary::Identical { notice } => notice.clone(),
        DiffSummary::Changed { lines } => render_lines(lines),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_lines() {
        let lines = vec![
            DiffLine::Unchanged("import os".to_string()),
            DiffLine::Removed("print \"hi\"".to_string()),
            DiffLine::Added("print(\"hi\")".to_string()),
        ];
        assert_eq!(
            render_lines(&lines),
            "  import os\n- print \"hi\"\n+ print(\"hi\")"
        );
    }

    #[test]
    fn test_render_summary_identical() {
        let summary = summarize("same", "same", "f.py");
        assert_eq!(render_summary(&summary), "Opened f.py (no changes detected)");
    }

    #[test]
    fn test_render_empty_lines() {
        assert_eq!(render_lines(&[]), "");
    }
}
