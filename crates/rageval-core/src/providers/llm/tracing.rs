use crate::model::{LlmRequest, LlmResponse};
use crate::providers::llm::LlmClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info_span, Instrument};

/// Wraps every completion in a `gen_ai.client.request` span.
pub struct TracingLlmClient {
    inner: Arc<dyn LlmClient>,
}

impl TracingLlmClient {
    pub fn new(inner: Arc<dyn LlmClient>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl LlmClient for TracingLlmClient {
    async fn complete(&self, request: &LlmRequest) -> anyhow::Result<LlmResponse> {
        let provider = self.inner.provider_name();
        let span = info_span!(
            "gen_ai.client.request",
            "gen_ai.system" = provider,
            "gen_ai.request.model" = request.model.as_str(),
            "gen_ai.request.max_tokens" = request.max_tokens,
            "gen_ai.request.temperature" = f64::from(request.temperature),
            "gen_ai.response.model" = tracing::field::Empty,
            "gen_ai.usage.input_tokens" = tracing::field::Empty,
            "gen_ai.usage.output_tokens" = tracing::field::Empty,
            "rageval.duration_ms" = tracing::field::Empty,
            "error" = tracing::field::Empty,
            "error.message" = tracing::field::Empty
        );

        async move {
            let start = std::time::Instant::now();
            let result = self.inner.complete(request).await;
            let span = tracing::Span::current();
            span.record("rageval.duration_ms", start.elapsed().as_millis() as u64);

            match &result {
                Ok(resp) => {
                    span.record("gen_ai.response.model", resp.model.as_str());
                    if let Some(usage) = resp.meta.get("usage") {
                        if let Some(i) = usage.get("input_tokens").and_then(|v| v.as_u64()) {
                            span.record("gen_ai.usage.input_tokens", i);
                        }
                        if let Some(o) = usage.get("output_tokens").and_then(|v| v.as_u64()) {
                            span.record("gen_ai.usage.output_tokens", o);
                        }
                    }
                    tracing::debug!(chars = resp.text.len(), "judge completion received");
                }
                Err(e) => {
                    span.record("error", true);
                    span.record("error.message", e.to_string().as_str());
                    tracing::warn!("judge call failed: {}", e);
                }
            }

            result
        }
        .instrument(span)
        .await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::llm::fake::FakeClient;

    #[tokio::test]
    async fn passes_completion_through_unchanged() {
        let inner = Arc::new(FakeClient::new("gpt-4".to_string()).with_response("verdict"));
        let client = TracingLlmClient::new(inner);
        let req = LlmRequest {
            model: "gpt-4".to_string(),
            prompt: "p".to_string(),
            max_tokens: 10,
            temperature: 0.5,
        };

        let res = client.complete(&req).await.unwrap();
        assert_eq!(res.text, "verdict");
        assert_eq!(res.provider, "fake");
        assert_eq!(client.provider_name(), "fake");
    }
}
