//! Failure-mode aggregation over per-item evaluations.

use crate::model::{Evaluation, EvaluationResult, FailureMode, FailureReport};
use serde::{Deserialize, Serialize};

/// Scores strictly below this are failures.
pub const LOW_SCORE_THRESHOLD: i64 = 3;

/// Score assumed for a criterion whose score is missing or not an integer.
pub const DEFAULT_PASSING_SCORE: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedScorePolicy {
    /// Count as [`DEFAULT_PASSING_SCORE`].
    #[default]
    Lenient,
    /// Report as an issue of its own.
    Strict,
}

pub fn aggregate(results: &[EvaluationResult]) -> FailureReport {
    aggregate_with(results, MalformedScorePolicy::default())
}

pub fn aggregate_with(results: &[EvaluationResult], policy: MalformedScorePolicy) -> FailureReport {
    let failure_modes = results
        .iter()
        .filter_map(|r| {
            let issues = issues_for(&r.evaluation, policy);
            if issues.is_empty() {
                None
            } else {
                Some(FailureMode {
                    id: r.id.clone(),
                    question: r.question.clone(),
                    issues,
                })
            }
        })
        .collect();

    FailureReport {
        total_evaluations: results.len(),
        failure_modes,
    }
}

fn issues_for(evaluation: &Evaluation, policy: MalformedScorePolicy) -> Vec<String> {
    let scores = match evaluation {
        Evaluation::Scored(s) => s,
        Evaluation::ParseFailed(_) => return Vec::new(),
    };

    let mut issues = Vec::new();
    for (criterion, record) in scores.iter() {
        match record.score {
            Some(score) if score < LOW_SCORE_THRESHOLD => {
                issues.push(format!("{}: {}", criterion, record.reasoning));
            }
            Some(_) => {}
            None => match policy {
                MalformedScorePolicy::Lenient => {
                    tracing::debug!(
                        criterion = criterion.as_str(),
                        "missing score treated as {}",
                        DEFAULT_PASSING_SCORE
                    );
                }
                MalformedScorePolicy::Strict => {
                    issues.push(format!("{}: malformed score", criterion));
                }
            },
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CriteriaScores, ItemId, ParseFailure, ScoreRecord};

    fn scored(id: u64, c: Option<i64>, m: Option<i64>, r: Option<i64>) -> EvaluationResult {
        let rec = |score: Option<i64>, why: &str| ScoreRecord {
            score,
            reasoning: why.to_string(),
        };
        EvaluationResult {
            id: ItemId::Number(id),
            question: format!("question {}", id),
            evaluation: Evaluation::Scored(CriteriaScores {
                correctness: rec(c, "c-why"),
                completeness: rec(m, "m-why"),
                relevance: rec(r, "r-why"),
            }),
        }
    }

    fn parse_failed(id: u64) -> EvaluationResult {
        EvaluationResult {
            id: ItemId::Number(id),
            question: "unparsed".to_string(),
            evaluation: Evaluation::ParseFailed(ParseFailure {
                error: "Failed to parse LLM response".to_string(),
                raw: "garbage".to_string(),
            }),
        }
    }

    #[test]
    fn threshold_is_strictly_below_three() {
        let report = aggregate(&[scored(1, Some(2), Some(5), Some(5))]);
        assert_eq!(report.failure_modes.len(), 1);
        assert_eq!(report.failure_modes[0].issues, vec!["correctness: c-why"]);

        let report = aggregate(&[scored(1, Some(3), Some(5), Some(5))]);
        assert!(report.failure_modes.is_empty());
    }

    #[test]
    fn issues_follow_criterion_order() {
        let report = aggregate(&[scored(7, Some(1), Some(2), Some(1))]);
        assert_eq!(
            report.failure_modes[0].issues,
            vec!["correctness: c-why", "completeness: m-why", "relevance: r-why"]
        );
    }

    #[test]
    fn parse_failures_count_but_never_flag() {
        let report = aggregate(&[parse_failed(1), scored(2, Some(4), Some(4), Some(4))]);
        assert_eq!(report.total_evaluations, 2);
        assert!(report.failure_modes.is_empty());
    }

    #[test]
    fn failure_modes_keep_input_order() {
        let report = aggregate(&[
            scored(3, Some(1), Some(5), Some(5)),
            scored(1, Some(5), Some(5), Some(5)),
            scored(2, Some(5), Some(2), Some(5)),
        ]);
        let ids: Vec<String> = report
            .failure_modes
            .iter()
            .map(|f| f.id.to_string())
            .collect();
        assert_eq!(ids, vec!["3", "2"]);
        assert_eq!(report.total_evaluations, 3);
    }

    #[test]
    fn missing_score_passes_by_default() {
        let report = aggregate(&[scored(1, None, Some(4), Some(4))]);
        assert!(report.failure_modes.is_empty());
    }

    #[test]
    fn strict_policy_flags_missing_score() {
        let report =
            aggregate_with(&[scored(1, None, Some(4), Some(1))], MalformedScorePolicy::Strict);
        assert_eq!(
            report.failure_modes[0].issues,
            vec!["correctness: malformed score", "relevance: r-why"]
        );
    }

    #[test]
    fn out_of_range_low_scores_are_still_flagged() {
        let report = aggregate(&[scored(1, Some(0), Some(-1), Some(9))]);
        assert_eq!(report.failure_modes[0].issues.len(), 2);
    }

    #[test]
    fn empty_input_gives_empty_report() {
        assert_eq!(aggregate(&[]), FailureReport::default());
    }
}
