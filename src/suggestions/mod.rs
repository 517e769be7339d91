//! Free-form review suggestions from a language model.
//!
//! Suggestions are best effort: a failed call yields [`Suggestion::Failed`],
//! which is rendered into the report instead of aborting the review.

mod groq;

pub use groq::{GroqClient, SuggestionError, DEFAULT_GROQ_API_BASE, DEFAULT_MODEL};

use std::fmt;

/// Prefix of the text rendered for a failed suggestion call
pub const FAILURE_PREFIX: &str = "AI Review failed:";

/// Outcome of a suggestion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// Advisory text from the model
    Review(String),
    /// The call failed; `cause` describes why
    Failed { cause: String },
}

impl Suggestion {
    pub fn failed(cause: impl fmt::Display) -> Self {
        Suggestion::Failed {
            cause: cause.to_string(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Suggestion::Failed { .. })
    }

    /// Text written into the report
    pub fn into_text(self) -> String {
        match self {
            Suggestion::Review(text) => text,
            failed @ Suggestion::Failed { .. } => failed.to_string(),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::Review(text) => f.write_str(text),
            Suggestion::Failed { cause } => write!(f, "{} {}", FAILURE_PREFIX, cause),
        }
    }
}

/// Source of review suggestions for a file's text
#[allow(async_fn_in_trait)]
pub trait SuggestionProvider {
    /// Review `code`. Never fails; problems come back as [`Suggestion::Failed`].
    async fn review(&self, code: &str) -> Suggestion;
}

/// Provider used when suggestions are switched off
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledSuggestions;

impl SuggestionProvider for DisabledSuggestions {
    async fn review(&self, _code: &str) -> Suggestion {
        Suggestion::Review("AI suggestions were disabled for this run.".to_string())
    }
}
