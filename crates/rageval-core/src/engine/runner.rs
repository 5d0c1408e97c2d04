use crate::errors::RunError;
use crate::judge::AnswerEvaluator;
use crate::model::{EvaluationItem, EvaluationResult, FailureReport};
use crate::report::failure::{aggregate_with, MalformedScorePolicy};
use crate::report::progress::{ProgressEvent, ProgressSink};

#[derive(Debug, Clone)]
pub struct RunArtifacts {
    pub results: Vec<EvaluationResult>,
    pub report: FailureReport,
}

pub struct Runner {
    pub evaluator: AnswerEvaluator,
    pub malformed_scores: MalformedScorePolicy,
}

impl Runner {
    pub fn new(evaluator: AnswerEvaluator, malformed_scores: MalformedScorePolicy) -> Self {
        Self {
            evaluator,
            malformed_scores,
        }
    }

    /// Judge every item in input order, one at a time, then aggregate.
    ///
    /// The first judge failure aborts the run; nothing is returned for the
    /// items already judged.
    pub async fn run(
        &self,
        items: &[EvaluationItem],
        progress: Option<ProgressSink>,
    ) -> Result<RunArtifacts, RunError> {
        let total = items.len();
        let mut results = Vec::with_capacity(total);

        for (idx, item) in items.iter().enumerate() {
            if let Some(sink) = &progress {
                sink(ProgressEvent {
                    position: idx + 1,
                    total,
                    id: item.id.to_string(),
                });
            }
            let result = self.evaluator.evaluate_item(item).await.map_err(|e| {
                tracing::error!(id = %item.id, "evaluation aborted: {}", e);
                e
            })?;
            if result.evaluation.is_parse_failure() {
                tracing::warn!(id = %item.id, "judge response could not be parsed");
            }
            results.push(result);
        }

        let report = aggregate_with(&results, self.malformed_scores);
        tracing::info!(
            total = report.total_evaluations,
            flagged = report.failure_modes.len(),
            "run complete"
        );
        Ok(RunArtifacts { results, report })
    }
}
