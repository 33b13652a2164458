use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{conf::settings, prelude::*};

/// Client for an OpenAI-compatible chat completions endpoint. The provider
/// switch in `conf` points this at openai, gemini or a local ollama without
/// any code change here.
pub struct LlmClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
pub struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl LlmClient {
    pub fn new(endpoint: &str, model: &str, api_key: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| Error::RemoteService(e.to_string()))?;
        Ok(LlmClient {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_settings() -> Result<Self> {
        if settings.ai_key.is_empty() {
            tracing::warn!("AI_KEY is not set, analysis calls will fail");
        }
        Self::new(&settings.ai_endpoint, &settings.ai_model, &settings.ai_key)
    }

    /// One chat completions round trip asking the model for JSON output.
    /// No retries; a failed call surfaces as `RemoteService` and the caller
    /// degrades to the fallback result.
    pub(crate) async fn chat_completion(&self, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };
        let response = self
            .http
            .post(format!("{}/chat/completions", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::RemoteService(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::RemoteService(format!("{}: {}", status, body)));
        }
        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::RemoteService(e.to_string()))?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| Error::RemoteService("model returned no content".into()))
    }
}
