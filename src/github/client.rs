use super::{FetchError, RepoRef, SourceFetcher, SourceFile, SOURCE_EXTENSION};
use base64::Engine;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_BRANCH: &str = "main";

const ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("java-review/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize)]
struct TreeResponse {
    #[serde(default)]
    tree: Vec<TreeEntry>,
}

#[derive(Debug, Deserialize)]
struct TreeEntry {
    path: String,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    content: Option<String>,
}

/// GitHub REST client for reading repository sources
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    token: String,
    api_base: String,
    branch: String,
}

impl GitHubClient {
    /// Create a new client authenticating with `token`
    pub fn new(token: &str) -> Self {
        Self {
            client: http_client(Client::builder()),
            token: token.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }

    /// Use a different API root (GitHub Enterprise)
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    /// Read from `branch` instead of `main`
    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branch = branch.to_string();
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// URL of the recursive tree listing for the configured branch
    pub fn tree_url(&self, repo: &RepoRef) -> String {
        format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            self.api_base, repo.owner, repo.name, self.branch
        )
    }

    /// URL of a single file's contents on the configured branch
    pub fn contents_url(&self, repo: &RepoRef, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.api_base, repo.owner, repo.name, path, self.branch
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let http_err = |source: reqwest::Error| FetchError::Http {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", ACCEPT)
            .send()
            .await
            .map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.json().await.map_err(http_err)
    }

    /// List paths of all source files on the branch, in tree order
    pub async fn list_source_paths(&self, repo: &RepoRef) -> Result<Vec<String>, FetchError> {
        let url = self.tree_url(repo);
        debug!(%url, "Listing repository tree");

        let tree: TreeResponse = self.get_json(&url).await?;
        Ok(select_sources(tree.tree.into_iter().map(|entry| entry.path)))
    }

    /// Fetch and decode one file
    pub async fn fetch_file(&self, repo: &RepoRef, path: &str) -> Result<SourceFile, FetchError> {
        let url = self.contents_url(repo, path);
        debug!(%url, "Fetching file contents");

        let body: ContentResponse = self.get_json(&url).await?;
        let encoded = body
            .content
            .ok_or_else(|| FetchError::MissingContent(path.to_string()))?;

        Ok(SourceFile {
            path: path.to_string(),
            content: decode_content(path, &encoded)?,
        })
    }

    /// Fetch every Java file of the repository
    pub async fn fetch_java_files(&self, repo: &RepoRef) -> Result<Vec<SourceFile>, FetchError> {
        let paths = self.list_source_paths(repo).await?;
        info!(repository = %repo, branch = %self.branch, files = paths.len(), "Found source files");

        let mut files = Vec::with_capacity(paths.len());
        for path in &paths {
            files.push(self.fetch_file(repo, path).await?);
        }

        Ok(files)
    }
}

impl SourceFetcher for GitHubClient {
    async fn fetch_sources(&self, repo: &RepoRef) -> Result<Vec<SourceFile>, FetchError> {
        self.fetch_java_files(repo).await
    }
}

/// Apply timeout and User-Agent. GitHub rejects requests without the latter.
fn http_client(builder: ClientBuilder) -> Client {
    builder
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "Failed to configure HTTP client, using defaults");
            Client::new()
        })
}

/// Keep paths of source files, preserving order
fn select_sources(paths: impl Iterator<Item = String>) -> Vec<String> {
    paths.filter(|p| p.ends_with(SOURCE_EXTENSION)).collect()
}

/// Decode a base64 `content` field, which GitHub wraps with line breaks
fn decode_content(path: &str, encoded: &str) -> Result<String, FetchError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(compact)
        .map_err(|source| FetchError::Decode {
            path: path.to_string(),
            source,
        })?;

    String::from_utf8(bytes).map_err(|source| FetchError::Utf8 {
        path: path.to_string(),
        source,
    })
}
