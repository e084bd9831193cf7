//! OpenRouter chat-completion client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use ruya_core::domain::{InterpretationHints, InterpretationRequest};
use ruya_core::ports::{InterpretationProvider, ProviderError};

use super::format_interpretation;

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "deepseek/deepseek-r1:free";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Error bodies are cut to this many characters before they are kept.
const MAX_ERROR_BODY: usize = 512;

/// OpenRouter connection settings.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    /// Sent as `HTTP-Referer` for attribution on openrouter.ai.
    pub referer: String,
    /// Sent as `X-Title`.
    pub app_title: String,
}

impl OpenRouterConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            referer: "ruya-dream-journal".to_string(),
            app_title: "Ruya Dream Journal".to_string(),
        }
    }

    /// Read settings from the environment. `None` when `OPENROUTER_API_KEY`
    /// is unset or blank.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("OPENROUTER_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Ok(model) = std::env::var("OPENROUTER_MODEL") {
            config.model = model;
        }
        if let Some(secs) = std::env::var("OPENROUTER_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        Some(config)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatMessage>,
}

/// Interpretation provider backed by an OpenRouter model.
pub struct OpenRouterInterpreter {
    client: reqwest::Client,
    config: OpenRouterConfig,
}

impl OpenRouterInterpreter {
    pub fn new(config: OpenRouterConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        tracing::info!(model = %config.model, base_url = %config.base_url, "OpenRouter interpreter ready");

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }
}

#[async_trait]
impl InterpretationProvider for OpenRouterInterpreter {
    async fn interpret(
        &self,
        request: &InterpretationRequest,
        hints: &InterpretationHints,
    ) -> Result<String, ProviderError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: Some(build_prompt(request, hints)),
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.app_title)
            .json(&body)
            .send()
            .await
            .map_err(transport_err)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_err)?;

        if !status.is_success() {
            return Err(status_err(status.as_u16(), text));
        }

        let content = parse_completion(&text)?;
        tracing::debug!(chars = content.len(), "Interpretation received");

        Ok(format_interpretation(&content))
    }
}

fn transport_err(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Transport("request timed out".to_string())
    } else {
        ProviderError::Transport(e.to_string())
    }
}

fn status_err(status: u16, body: String) -> ProviderError {
    if status == 429 {
        return ProviderError::RateLimited;
    }
    let body = body.chars().take(MAX_ERROR_BODY).collect();
    ProviderError::Status { status, body }
}

/// Pull `choices[0].message.content` out of a completion body.
fn parse_completion(body: &str) -> Result<String, ProviderError> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| ProviderError::MalformedResponse("no completion content".to_string()))
}

fn build_prompt(request: &InterpretationRequest, hints: &InterpretationHints) -> String {
    let mut prompt = String::from(
        "You are an experienced interpreter of dreams in the Islamic tradition. \
         Interpret the following dream in detail according to classical sources.\n\n",
    );

    prompt.push_str(&format!("Dream title: {}\n", request.title.trim()));
    if let Some(category) = request
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        prompt.push_str(&format!("Dream category: {category}\n"));
    }
    prompt.push_str(&format!("Dream narrative: {}\n", request.description.trim()));

    let mut about = Vec::new();
    if let Some(age) = hints.age {
        about.push(format!("age {age}"));
    }
    if let Some(gender) = hints.gender {
        about.push(format!("gender {gender}"));
    }
    if let Some(status) = hints.marital_status {
        about.push(format!("marital status {status}"));
    }
    if !about.is_empty() {
        prompt.push_str(&format!("About the dreamer: {}\n", about.join(", ")));
    }

    prompt.push_str(
        "\nFirst explain what the symbols in the dream mean, then give the overall \
         interpretation, and finish with advice for the dreamer. \
         Answer in clear, well-organized paragraphs.",
    );
    prompt
}
