use crate::github::{GitHubClient, DEFAULT_API_BASE, DEFAULT_BRANCH};
use crate::output::OutputFormat;
use crate::suggestions::{
    DisabledSuggestions, GroqClient, Suggestion, SuggestionProvider, DEFAULT_GROQ_API_BASE,
    DEFAULT_MODEL,
};
use std::path::PathBuf;

/// Settings for reviewing a remote repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    /// Repository locator, e.g. `https://github.com/owner/name`
    pub repository: String,
    pub github: GitHubConfig,
    pub suggestions: SuggestionConfig,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
}

/// GitHub access settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubConfig {
    pub token: String,
    pub api_base: String,
    pub branch: String,
}

impl GitHubConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }

    pub fn client(&self) -> GitHubClient {
        GitHubClient::new(&self.token)
            .with_api_base(&self.api_base)
            .with_branch(&self.branch)
    }
}

/// Suggestion service settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionConfig {
    Disabled,
    Groq {
        api_key: String,
        api_base: String,
        model: String,
    },
}

impl SuggestionConfig {
    pub fn groq(api_key: impl Into<String>) -> Self {
        SuggestionConfig::Groq {
            api_key: api_key.into(),
            api_base: DEFAULT_GROQ_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn provider(&self) -> Suggester {
        match self {
            SuggestionConfig::Disabled => Suggester::Disabled(DisabledSuggestions),
            SuggestionConfig::Groq {
                api_key,
                api_base,
                model,
            } => Suggester::Groq(
                GroqClient::new(api_key)
                    .with_api_base(api_base)
                    .with_model(model),
            ),
        }
    }
}

/// Suggestion provider selected by configuration
#[derive(Clone)]
pub enum Suggester {
    Disabled(DisabledSuggestions),
    Groq(GroqClient),
}

impl SuggestionProvider for Suggester {
    async fn review(&self, code: &str) -> Suggestion {
        match self {
            Suggester::Disabled(provider) => provider.review(code).await,
            Suggester::Groq(provider) => provider.review(code).await,
        }
    }
}
