use crate::errors::RunError;
use crate::judge::{AnswerEvaluator, JudgeStrategy};
use crate::model::{Evaluation, LlmRequest};

pub(crate) async fn evaluate_impl(
    evaluator: &AnswerEvaluator,
    question: &str,
    rag_answer: &str,
    ground_truth: &str,
) -> Result<Evaluation, RunError> {
    match &evaluator.strategy {
        JudgeStrategy::Mock(mock) => {
            let rule = mock.matching_rule(rag_answer).map(|r| r.marker);
            tracing::debug!(rule = ?rule, "mock judge verdict");
            Ok(mock.evaluate(rag_answer))
        }
        JudgeStrategy::Live { client, config } => {
            let prompt = super::prompt::build_prompt_impl(question, rag_answer, ground_truth);
            let request = LlmRequest {
                model: config.model.clone(),
                prompt,
                max_tokens: config.max_tokens,
                temperature: config.temperature,
            };
            let text = super::client::call_judge_impl(client.as_ref(), &request).await?;
            Ok(super::client::parse_judge_output(&text))
        }
    }
}
