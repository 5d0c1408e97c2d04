use crate::errors::RunError;
use crate::model::{CriteriaScores, Evaluation, LlmRequest, ParseFailure};
use crate::providers::llm::{LlmClient, ProviderError};

pub const PARSE_ERROR_MESSAGE: &str = "Failed to parse LLM response";

pub(crate) async fn call_judge_impl(
    client: &dyn LlmClient,
    request: &LlmRequest,
) -> Result<String, RunError> {
    let provider = client.provider_name();
    match client.complete(request).await {
        Ok(resp) => Ok(resp.text),
        Err(e) => {
            let mut err = RunError::judge_unavailable(Some(provider.to_string()), format!("{:#}", e));
            if let Some(status) = e.downcast_ref::<ProviderError>().and_then(|p| p.status()) {
                err = err.with_status(status);
            }
            Err(err)
        }
    }
}

/// Parse the judge's text as the three-criteria JSON object.
///
/// Anything else (prose, malformed JSON, a missing criterion) yields the
/// parse-failure variant carrying the trimmed text.
pub(crate) fn parse_judge_output(text: &str) -> Evaluation {
    let trimmed = text.trim();
    match serde_json::from_str::<CriteriaScores>(trimmed) {
        Ok(scores) => Evaluation::Scored(scores),
        Err(e) => {
            tracing::warn!("judge output is not valid evaluation JSON: {}", e);
            Evaluation::ParseFailed(ParseFailure {
                error: PARSE_ERROR_MESSAGE.to_string(),
                raw: trimmed.to_string(),
            })
        }
    }
}
