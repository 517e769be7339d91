mod client;
mod repo;

pub use client::{GitHubClient, DEFAULT_API_BASE, DEFAULT_BRANCH};
pub use repo::RepoRef;

use thiserror::Error;

/// Extension of the source files under review
pub const SOURCE_EXTENSION: &str = ".java";

/// A fetched source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: String,
    pub content: String,
}

/// Errors that abort fetching a repository
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid repository reference: {0}")]
    InvalidRepository(String),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("no content returned for {0}")]
    MissingContent(String),

    #[error("failed to decode content of {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("{path} is not valid UTF-8: {source}")]
    Utf8 {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Source of files to review
#[allow(async_fn_in_trait)]
pub trait SourceFetcher {
    /// Fetch every source file of `repo`. Any failure aborts the fetch.
    async fn fetch_sources(&self, repo: &RepoRef) -> Result<Vec<SourceFile>, FetchError>;
}
