//! Chat-completion oracle
//!
//! One trait covers both oracle roles the pipeline needs — route
//! classification and answer synthesis — so tests can substitute a
//! deterministic stub for either.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::ProviderError;

/// Opaque chat oracle: system instructions plus a user message in, free
/// text out.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError>;
}

/// OpenAI-backed chat oracle.
pub struct OpenAiChat {
    api_key: String,
    client: Client,
    base_url: String,
    model: String,
}

impl OpenAiChat {
    pub fn new(
        api_key: String,
        base_url: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        if api_key.is_empty() {
            return Err(ProviderError::ConfigError(
                "OpenAI API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::ConfigError(e.to_string()))?;

        Ok(Self {
            api_key,
            client,
            base_url,
            model,
        })
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Probe the API with a model listing; used by `finrag health`.
    pub async fn health_check(&self) -> Result<bool, ProviderError> {
        debug!("performing OpenAI health check");
        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(ProviderError::from)?;

        match response.status().as_u16() {
            200 => Ok(true),
            401 => Err(ProviderError::AuthError),
            _ => Ok(false),
        }
    }
}

#[async_trait]
impl ChatCompletion for OpenAiChat {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: 0.0,
        };

        debug!(model = %self.model, "sending chat completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", self.auth_header())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("OpenAI chat request failed: {}", e);
                ProviderError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("OpenAI chat error ({}): {}", status, error_text);
            return match status.as_u16() {
                401 => Err(ProviderError::AuthError),
                429 => Err(ProviderError::RateLimited(60)),
                _ => Err(ProviderError::Provider(format!(
                    "OpenAI API error: {}",
                    status
                ))),
            };
        }

        let body: ChatCompletionResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .map(|message| message.content)
            .ok_or_else(|| ProviderError::Provider("No content in response".to_string()))
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatMessage>,
}
