//! Chat-completion client seam and the OpenAI-compatible implementation.

use std::sync::Arc;

use async_trait::async_trait;
use forge_config::{ConfigError, LlmConfig};
use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::http::check_response;
use crate::prompts::Prompt;

// ── Messages ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One `{role, content}` entry of a chat request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Ordered messages plus an optional per-call temperature.
///
/// Without one, the client's configured temperature applies.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: Option<f32>,
}

impl CompletionRequest {
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            temperature: None,
        }
    }

    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// All message contents joined, for matching and logging.
    #[must_use]
    pub fn text(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<&Prompt> for CompletionRequest {
    fn from(prompt: &Prompt) -> Self {
        let request = Self::new(vec![
            ChatMessage::system(prompt.system.clone()),
            ChatMessage::user(prompt.user.clone()),
        ]);
        match prompt.temperature {
            Some(temperature) => request.with_temperature(temperature),
            None => request,
        }
    }
}

// ── Client seam ────────────────────────────────────────────────────

/// Anything that turns a chat request into the text of one reply.
///
/// One outbound call per invocation. Implementations never retry.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// # Errors
    ///
    /// Returns [`LlmError`] on transport failure, a non-success status, or an
    /// empty reply.
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}

// ── OpenAI-compatible client ───────────────────────────────────────

#[derive(Serialize)]
struct ChatRequestBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for `{base_url}/chat/completions` with bearer authentication.
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
    json_mode: bool,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Build a client from the `[llm]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Config`] when no API key is configured, or
    /// [`LlmError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        config.require()?;

        let mut builder = reqwest::Client::builder().user_agent("forge/0.1");
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint(&config.base_url),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            json_mode: config.json_mode,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn body<'a>(&'a self, request: &'a CompletionRequest) -> ChatRequestBody<'a> {
        ChatRequestBody {
            model: &self.model,
            messages: &request.messages,
            temperature: Some(request.temperature.unwrap_or(self.temperature)),
            max_tokens: self.max_tokens,
            response_format: self.json_mode.then_some(ResponseFormat {
                kind: "json_object",
            }),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            messages = request.messages.len(),
            "sending completion request"
        );

        let body = self.body(&request);
        let resp = check_response(
            self.http
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await?,
        )
        .await?;

        let data: ChatResponse = resp.json().await?;
        let content = first_content(data)?;
        tracing::debug!(chars = content.len(), "completion received");
        Ok(content)
    }
}

// ── Disabled client ────────────────────────────────────────────────

/// Stand-in used when no API key is configured. Every call fails with
/// [`LlmError::Config`], so read-only commands still work.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledClient;

#[async_trait]
impl CompletionClient for DisabledClient {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, LlmError> {
        Err(LlmError::Config(ConfigError::NotConfigured {
            section: "llm".to_string(),
        }))
    }
}

/// Build the client for `config`: [`OpenAiClient`] when an API key is set,
/// otherwise [`DisabledClient`].
///
/// # Errors
///
/// Returns [`LlmError::Http`] if the HTTP client fails to build.
pub fn connect(config: &LlmConfig) -> Result<Arc<dyn CompletionClient>, LlmError> {
    if !config.is_configured() {
        tracing::debug!("no API key configured; generation is disabled");
        return Ok(Arc::new(DisabledClient));
    }
    Ok(Arc::new(OpenAiClient::from_config(config)?))
}

/// `{base_url}/chat/completions`, tolerating a trailing slash.
fn endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

fn first_content(data: ChatResponse) -> Result<String, LlmError> {
    data.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(LlmError::EmptyResponse)
}
