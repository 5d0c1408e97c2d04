use crate::model::{EvaluationResult, FailureReport};

/// Format a single progress line for display. Deterministic, unit-testable.
#[must_use]
pub fn format_progress_line(position: usize, total: usize, id: &str) -> String {
    format!("Evaluating item {}/{} (id={})...", position, total, id)
}

pub fn emit_progress_line(line: &str) {
    eprintln!("{}", line);
}

#[must_use]
pub fn format_run_summary(
    results: &[EvaluationResult],
    report: &FailureReport,
    judge_label: &str,
) -> String {
    let parse_failures = results
        .iter()
        .filter(|r| r.evaluation.is_parse_failure())
        .count();

    let mut out = format!(
        "Summary: {} evaluated (judge: {}), {} flagged, {} unparsed",
        report.total_evaluations,
        judge_label,
        report.failure_modes.len(),
        parse_failures
    );
    for mode in &report.failure_modes {
        out.push_str(&format!("\n  [{}] {}", mode.id, mode.question));
        for issue in &mode.issues {
            out.push_str(&format!("\n      - {}", issue));
        }
    }
    out
}

pub fn print_run_summary(results: &[EvaluationResult], report: &FailureReport, judge_label: &str) {
    eprintln!("{}", format_run_summary(results, report, judge_label));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Evaluation, FailureMode, ItemId, ParseFailure};

    #[test]
    fn progress_line_is_stable() {
        assert_eq!(
            format_progress_line(2, 3, "q-2"),
            "Evaluating item 2/3 (id=q-2)..."
        );
    }

    #[test]
    fn summary_lists_flagged_items_and_parse_failures() {
        let results = vec![EvaluationResult {
            id: ItemId::Number(9),
            question: "?".to_string(),
            evaluation: Evaluation::ParseFailed(ParseFailure {
                error: "Failed to parse LLM response".to_string(),
                raw: "".to_string(),
            }),
        }];
        let report = FailureReport {
            total_evaluations: 2,
            failure_modes: vec![FailureMode {
                id: ItemId::Number(2),
                question: "Boiling point of water?".to_string(),
                issues: vec!["correctness: Incorrect boiling point.".to_string()],
            }],
        };

        let text = format_run_summary(&results, &report, "mock");
        assert!(text.starts_with("Summary: 2 evaluated (judge: mock), 1 flagged, 1 unparsed"));
        assert!(text.contains("[2] Boiling point of water?"));
        assert!(text.contains("- correctness: Incorrect boiling point."));
    }
}
