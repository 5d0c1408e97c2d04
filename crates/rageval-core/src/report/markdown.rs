//! Human-readable Markdown report for a finished run.

use crate::model::{Criterion, Evaluation, EvaluationResult, FailureReport};
use chrono::{DateTime, Utc};
use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub judge: String,
    pub model: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl ReportMeta {
    pub fn now(judge: impl Into<String>, model: Option<String>) -> Self {
        Self {
            judge: judge.into(),
            model,
            generated_at: Utc::now(),
        }
    }
}

/// Mean score per criterion over scored items that carry an integer score.
pub fn criterion_averages(results: &[EvaluationResult]) -> Vec<(Criterion, Option<f64>)> {
    Criterion::ALL
        .into_iter()
        .map(|c| {
            let scores: Vec<f64> = results
                .iter()
                .filter_map(|r| r.evaluation.scores())
                .filter_map(|s| s.get(c).score)
                .map(|v| v as f64)
                .collect();
            let avg = if scores.is_empty() {
                None
            } else {
                Some(scores.iter().sum::<f64>() / scores.len() as f64)
            };
            (c, avg)
        })
        .collect()
}

pub fn render_markdown(
    results: &[EvaluationResult],
    report: &FailureReport,
    meta: &ReportMeta,
) -> String {
    let mut md = String::new();
    let parse_failures = results
        .iter()
        .filter(|r| r.evaluation.is_parse_failure())
        .count();

    let _ = writeln!(md, "# RAG Answer Evaluation Report\n");
    let _ = writeln!(md, "## Overview\n");
    let _ = writeln!(
        md,
        "Answers were scored against ground truth for correctness, completeness and \
         relevance on a 1-5 scale. Scores below 3 are reported as failure modes.\n"
    );
    let _ = writeln!(md, "- Judge: {}", meta.judge);
    if let Some(model) = &meta.model {
        let _ = writeln!(md, "- Model: {}", model);
    }
    let _ = writeln!(md, "- Generated: {}", meta.generated_at.to_rfc3339());
    let _ = writeln!(md, "- Items evaluated: {}", report.total_evaluations);
    let _ = writeln!(md, "- Items flagged: {}", report.failure_modes.len());
    let _ = writeln!(md, "- Unparseable judge responses: {}\n", parse_failures);

    let _ = writeln!(md, "## Average Scores\n");
    let _ = writeln!(md, "| Criterion | Average |");
    let _ = writeln!(md, "|---|---|");
    for (criterion, avg) in criterion_averages(results) {
        let cell = avg.map(|a| format!("{:.2}", a)).unwrap_or_else(|| "n/a".to_string());
        let _ = writeln!(md, "| {} | {} |", criterion, cell);
    }
    md.push('\n');

    let _ = writeln!(md, "## Failure Modes\n");
    if report.failure_modes.is_empty() {
        let _ = writeln!(md, "No low-scoring answers.\n");
    } else {
        for mode in &report.failure_modes {
            let _ = writeln!(md, "### [{}] {}\n", mode.id, mode.question);
            for issue in &mode.issues {
                let _ = writeln!(md, "- {}", issue);
            }
            md.push('\n');
        }
    }

    let _ = writeln!(md, "## Per-Item Scores\n");
    let _ = writeln!(md, "| ID | Question | Correctness | Completeness | Relevance |");
    let _ = writeln!(md, "|---|---|---|---|---|");
    for r in results {
        let id = escape_cell(&r.id.to_string());
        let question = escape_cell(&r.question);
        match &r.evaluation {
            Evaluation::Scored(s) => {
                let cells: Vec<String> = s
                    .iter()
                    .map(|(_, rec)| {
                        rec.score
                            .map(|v| v.to_string())
                            .unwrap_or_else(|| "?".to_string())
                    })
                    .collect();
                let _ = writeln!(
                    md,
                    "| {} | {} | {} |",
                    id,
                    question,
                    cells.join(" | ")
                );
            }
            Evaluation::ParseFailed(_) => {
                let _ = writeln!(
                    md,
                    "| {} | {} | parse failed | parse failed | parse failed |",
                    id, question
                );
            }
        }
    }

    md
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CriteriaScores, FailureMode, ItemId, ParseFailure, ScoreRecord};
    use chrono::TimeZone;

    fn fixture() -> (Vec<EvaluationResult>, FailureReport, ReportMeta) {
        let results = vec![
            EvaluationResult {
                id: ItemId::Number(1),
                question: "Capital of France?".to_string(),
                evaluation: Evaluation::Scored(CriteriaScores {
                    correctness: ScoreRecord::new(5, "ok"),
                    completeness: ScoreRecord::new(4, "ok"),
                    relevance: ScoreRecord::new(5, "ok"),
                }),
            },
            EvaluationResult {
                id: ItemId::Number(2),
                question: "Boiling point | water?".to_string(),
                evaluation: Evaluation::Scored(CriteriaScores {
                    correctness: ScoreRecord::new(2, "Incorrect boiling point."),
                    completeness: ScoreRecord::new(3, "meh"),
                    relevance: ScoreRecord {
                        score: None,
                        reasoning: "?".to_string(),
                    },
                }),
            },
            EvaluationResult {
                id: ItemId::Number(3),
                question: "Who?".to_string(),
                evaluation: Evaluation::ParseFailed(ParseFailure {
                    error: "Failed to parse LLM response".to_string(),
                    raw: "nope".to_string(),
                }),
            },
        ];
        let report = FailureReport {
            total_evaluations: 3,
            failure_modes: vec![FailureMode {
                id: ItemId::Number(2),
                question: "Boiling point | water?".to_string(),
                issues: vec!["correctness: Incorrect boiling point.".to_string()],
            }],
        };
        let meta = ReportMeta {
            judge: "mock".to_string(),
            model: None,
            generated_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        };
        (results, report, meta)
    }

    #[test]
    fn averages_skip_parse_failures_and_missing_scores() {
        let (results, _, _) = fixture();
        let avgs = criterion_averages(&results);
        assert_eq!(avgs[0], (Criterion::Correctness, Some(3.5)));
        assert_eq!(avgs[1], (Criterion::Completeness, Some(3.5)));
        assert_eq!(avgs[2], (Criterion::Relevance, Some(5.0)));
        assert_eq!(criterion_averages(&[])[0].1, None);
    }

    #[test]
    fn report_covers_overview_failures_and_table() {
        let (results, report, meta) = fixture();
        let md = render_markdown(&results, &report, &meta);

        assert!(md.starts_with("# RAG Answer Evaluation Report"));
        assert!(md.contains("- Judge: mock"));
        assert!(!md.contains("- Model:"));
        assert!(md.contains("- Generated: 2026-01-02T03:04:05+00:00"));
        assert!(md.contains("- Unparseable judge responses: 1"));
        assert!(md.contains("| correctness | 3.50 |"));
        assert!(md.contains("- correctness: Incorrect boiling point."));
        assert!(md.contains("| 2 | Boiling point \\| water? | 2 | 3 | ? |"));
        assert!(md.contains("| 3 | Who? | parse failed | parse failed | parse failed |"));
    }

    #[test]
    fn huge_scores_average_without_overflow() {
        let (results, _, _) = fixture();
        let mut big = results[0].clone();
        if let Evaluation::Scored(s) = &mut big.evaluation {
            s.correctness.score = Some(i64::MAX);
        }
        let avgs = criterion_averages(&[big.clone(), big]);
        assert_eq!(avgs[0].1, Some(i64::MAX as f64));
    }

    #[test]
    fn text_ids_are_escaped_in_the_table() {
        let (results, report, meta) = fixture();
        let mut odd = results[2].clone();
        odd.id = ItemId::Text("a|b".to_string());
        let md = render_markdown(&[odd], &report, &meta);
        assert!(md.contains("| a\\|b | Who? | parse failed | parse failed | parse failed |"));
    }

    #[test]
    fn clean_run_says_so() {
        let (results, _, meta) = fixture();
        let md = render_markdown(&results[..1], &FailureReport::default(), &meta);
        assert!(md.contains("No low-scoring answers."));
    }
}
