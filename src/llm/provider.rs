//! Remote text-generation providers

use crate::config::{ProviderConfig, ProviderKind};
use crate::error::AnalysisError;
use crate::llm::prompts::SYSTEM_PROMPT;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Anything that turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError>;
}

/// HTTP client for one configured provider.
pub struct RemoteProvider {
    client: Client,
    name: String,
    kind: ProviderKind,
    endpoint: String,
    model: String,
    api_key: String,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiReplyContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiReplyContent {
    #[serde(default)]
    parts: Vec<GeminiReplyPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiReplyPart {
    text: Option<String>,
}

impl RemoteProvider {
    /// Build a provider from config. Returns `Ok(None)` when the provider is
    /// disabled or its API key variable is unset.
    pub fn from_config(config: &ProviderConfig) -> Result<Option<Self>, reqwest::Error> {
        if !config.enabled {
            debug!("Provider {} is disabled", config.name);
            return Ok(None);
        }
        let Some(api_key) = config.api_key() else {
            info!(
                "Provider {} not configured ({} is unset)",
                config.name, config.api_key_env
            );
            return Ok(None);
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Some(Self {
            client,
            name: config.name.clone(),
            kind: config.kind,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }))
    }

    /// URL the request is posted to.
    pub fn request_url(&self) -> String {
        match self.kind {
            ProviderKind::OpenAiChat => self.endpoint.clone(),
            ProviderKind::Gemini => {
                format!("{}/models/{}:generateContent", self.endpoint, self.model)
            }
        }
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<reqwest::Response, AnalysisError> {
        let request = self.client.post(self.request_url()).json(body);
        let request = match self.kind {
            ProviderKind::OpenAiChat => request.bearer_auth(&self.api_key),
            ProviderKind::Gemini => request.header("x-goog-api-key", &self.api_key),
        };

        let response = request.send().await.map_err(|source| AnalysisError::Http {
            provider: self.name.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Status {
                provider: self.name.clone(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn generate_chat(&self, prompt: &str) -> Result<Option<String>, AnalysisError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let envelope: ChatResponse = self
            .post(&body)
            .await?
            .json()
            .await
            .map_err(|e| self.malformed(e))?;

        Ok(envelope
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }

    async fn generate_gemini(&self, prompt: &str) -> Result<Option<String>, AnalysisError> {
        let full_prompt = format!("{}\n\n{}", SYSTEM_PROMPT, prompt);
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: &full_prompt }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_tokens,
            },
        };

        let envelope: GeminiResponse = self
            .post(&body)
            .await?
            .json()
            .await
            .map_err(|e| self.malformed(e))?;

        Ok(envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text))
    }

    fn malformed(&self, error: reqwest::Error) -> AnalysisError {
        AnalysisError::MalformedEnvelope {
            provider: self.name.clone(),
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl TextGenerator for RemoteProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        debug!(
            "Sending {} character prompt to {} ({})",
            prompt.len(),
            self.name,
            self.model
        );

        let text = match self.kind {
            ProviderKind::OpenAiChat => self.generate_chat(prompt).await?,
            ProviderKind::Gemini => self.generate_gemini(prompt).await?,
        };

        match text {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(AnalysisError::EmptyResponse(self.name.clone())),
        }
    }
}
