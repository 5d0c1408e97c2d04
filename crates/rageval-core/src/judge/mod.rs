mod judge_internal;
pub mod mock;

use crate::errors::RunError;
use crate::model::{Evaluation, EvaluationItem, EvaluationResult};
use crate::providers::llm::LlmClient;
use mock::MockJudge;
use std::sync::Arc;

pub use judge_internal::client::PARSE_ERROR_MESSAGE;

pub const DEFAULT_JUDGE_MODEL: &str = "gpt-4";
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct JudgeRuntimeConfig {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for JudgeRuntimeConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_JUDGE_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// How answers get judged for the whole run. Chosen once by the caller.
#[derive(Clone)]
pub enum JudgeStrategy {
    Mock(MockJudge),
    Live {
        client: Arc<dyn LlmClient>,
        config: JudgeRuntimeConfig,
    },
}

impl JudgeStrategy {
    pub fn mock() -> Self {
        JudgeStrategy::Mock(MockJudge::default())
    }

    pub fn live(client: Arc<dyn LlmClient>, config: JudgeRuntimeConfig) -> Self {
        JudgeStrategy::Live { client, config }
    }

    /// Short label for logs and reports ("mock", "openai", ...).
    pub fn label(&self) -> &'static str {
        match self {
            JudgeStrategy::Mock(_) => "mock",
            JudgeStrategy::Live { client, .. } => client.provider_name(),
        }
    }

    pub fn model(&self) -> Option<&str> {
        match self {
            JudgeStrategy::Mock(_) => None,
            JudgeStrategy::Live { config, .. } => Some(config.model.as_str()),
        }
    }
}

impl std::fmt::Debug for JudgeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JudgeStrategy::Mock(m) => f.debug_tuple("Mock").field(m).finish(),
            JudgeStrategy::Live { client, config } => f
                .debug_struct("Live")
                .field("provider", &client.provider_name())
                .field("config", config)
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AnswerEvaluator {
    strategy: JudgeStrategy,
}

impl AnswerEvaluator {
    pub fn new(strategy: JudgeStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &JudgeStrategy {
        &self.strategy
    }

    /// Judge one answer.
    ///
    /// Unparseable judge output comes back as [`Evaluation::ParseFailed`].
    /// A judge that cannot be reached is an error of kind
    /// [`crate::errors::RunErrorKind::JudgeUnavailable`].
    pub async fn evaluate(
        &self,
        question: &str,
        rag_answer: &str,
        ground_truth: &str,
    ) -> Result<Evaluation, RunError> {
        judge_internal::run::evaluate_impl(self, question, rag_answer, ground_truth).await
    }

    pub async fn evaluate_item(&self, item: &EvaluationItem) -> Result<EvaluationResult, RunError> {
        let evaluation = self
            .evaluate(&item.question, &item.rag_answer, &item.ground_truth)
            .await?;
        Ok(EvaluationResult {
            id: item.id.clone(),
            question: item.question.clone(),
            evaluation,
        })
    }
}
