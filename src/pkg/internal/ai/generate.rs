use super::client::LlmClient;
use crate::prelude::Result;

/// Capability seam for the remote model call so handlers and tests can run
/// against deterministic fakes.
#[async_trait::async_trait]
pub trait GenerateOps: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[async_trait::async_trait]
impl GenerateOps for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.chat_completion(prompt).await
    }
}
