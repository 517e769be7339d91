use super::{Suggestion, SuggestionProvider};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "mixtral-8x7b-32768";

const REQUEST_TIMEOUT_SECS: u64 = 120;

const SYSTEM_PROMPT: &str = "As an expert Java developer, analyze the following code and provide \
specific suggestions for improvement based on Java best practices. Focus on:
1. Code readability and maintainability
2. Use of modern Java features
3. Performance optimization
4. Design patterns and SOLID principles";

/// Errors from a chat-completion request
#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("response contained no message content")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Groq chat-completions client producing review suggestions
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl GroqClient {
    /// Create a new client authenticating with `api_key`
    pub fn new(api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to configure HTTP client, using defaults");
                Client::new()
            });

        Self {
            client,
            api_key: api_key.to_string(),
            api_base: DEFAULT_GROQ_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Use a different OpenAI-compatible endpoint
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    fn request_body<'a>(&'a self, code: &str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("Code:\n{}", code),
                },
            ],
        }
    }

    /// Request suggestions, surfacing failures as errors
    pub async fn request(&self, code: &str) -> Result<String, SuggestionError> {
        let url = self.completions_url();
        debug!(%url, model = %self.model, "Requesting suggestions");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(code))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SuggestionError::Status { status, body });
        }

        let parsed: ChatResponse = response.json().await?;
        first_content(parsed)
    }
}

impl SuggestionProvider for GroqClient {
    async fn review(&self, code: &str) -> Suggestion {
        match self.request(code).await {
            Ok(text) => Suggestion::Review(text),
            Err(e) => {
                warn!(error = %e, "AI review failed");
                Suggestion::failed(e)
            }
        }
    }
}

fn first_content(response: ChatResponse) -> Result<String, SuggestionError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(SuggestionError::EmptyResponse)
}
