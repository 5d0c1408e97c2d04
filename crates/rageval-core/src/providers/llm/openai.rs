use super::{LlmClient, ProviderError};
use crate::model::{LlmRequest, LlmResponse};
use crate::providers::network::NetworkPolicy;
use async_trait::async_trait;
use serde_json::json;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAIClient {
    pub api_key: String,
    pub base_url: String,
    pub client: reqwest::Client,
    pub network: NetworkPolicy,
}

impl OpenAIClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
            network: NetworkPolicy::from_env(),
        }
    }

    pub fn with_network_policy(mut self, network: NetworkPolicy) -> Self {
        self.network = network;
        self
    }

    /// Point at an OpenAI-compatible endpoint (proxies, local gateways).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmClient for OpenAIClient {
    async fn complete(&self, request: &LlmRequest) -> anyhow::Result<LlmResponse> {
        let url = self.chat_url();

        let body = json!({
            "model": request.model,
            "messages": [{
                "role": "user",
                "content": request.prompt,
            }],
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });

        self.network.check_judge_call(&url)?;
        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                provider: "openai",
                status: status.as_u16(),
                body: error_text,
            }
            .into());
        }

        let json: serde_json::Value = resp.json().await?;

        let text = json
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or(ProviderError::MissingContent { provider: "openai" })?
            .to_string();

        let model = json
            .get("model")
            .and_then(|v| v.as_str())
            .unwrap_or(&request.model)
            .to_string();

        let mut meta = json!({});
        if let Some(usage) = json.get("usage") {
            meta["usage"] = json!({
                "input_tokens": usage.get("prompt_tokens"),
                "output_tokens": usage.get("completion_tokens"),
            });
        }

        Ok(LlmResponse {
            text,
            provider: "openai".to_string(),
            model,
            meta,
        })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> LlmRequest {
        LlmRequest {
            model: "gpt-4".to_string(),
            prompt: "hello".to_string(),
            max_tokens: 8,
            temperature: 0.5,
        }
    }

    #[tokio::test]
    async fn openai_client_respects_network_deny_policy() {
        let client = OpenAIClient::new("test-key".to_string())
            .with_network_policy(NetworkPolicy::Deny("unit test".into()));
        let err = client
            .complete(&request())
            .await
            .expect_err("deny policy should block the judge call");
        let msg = err.to_string();
        assert!(msg.contains("network access denied"));
        assert!(msg.contains("api.openai.com"));
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let client =
            OpenAIClient::new("k".to_string()).with_base_url("http://localhost:8080/v1/");
        assert_eq!(client.chat_url(), "http://localhost:8080/v1/chat/completions");
    }
}
