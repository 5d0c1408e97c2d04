#[cfg(test)]
pub(crate) mod fake;
pub mod openai;
pub mod tracing;

use crate::model::{LlmRequest, LlmResponse};
use async_trait::async_trait;

/// Request/response boundary to a judge model.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: &LlmRequest) -> anyhow::Result<LlmResponse>;

    fn provider_name(&self) -> &'static str;
}

/// Transport-level provider failures that carry an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{provider} chat API error (status {status}): {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{provider} API response missing content")]
    MissingContent { provider: &'static str },
}

impl ProviderError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Status { status, .. } => Some(*status),
            ProviderError::MissingContent { .. } => None,
        }
    }
}
