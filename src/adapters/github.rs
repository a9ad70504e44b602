use std::collections::BTreeMap;
use std::time::Duration;

use base64::Engine;
use reqwest::{Client, Response};

use crate::domain::model::{ContentsResponse, Manifest, RepoDetails, Repository};
use crate::utils::error::{PortfolioError, Result};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Thin client over the GitHub REST v3 surface the portfolio needs: the
/// repository listing, per-repository language breakdowns and manifest files.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    account: String,
    api_base: String,
    token: Option<String>,
    timeout: Option<Duration>,
}

impl GithubClient {
    pub fn new(
        account: &str,
        api_base: &str,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            account: account.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
            token,
            timeout,
        })
    }

    /// Shared request path. Every call carries the v3 Accept header and, when
    /// configured, the token. A 403 usually means the unauthenticated per-IP
    /// quota ran out, so it gets a hint in the log before normal status
    /// handling takes over.
    async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}/{}", self.api_base, endpoint);
        let mut request = self.client.get(&url).header("Accept", GITHUB_ACCEPT);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        let response = request.send().await?;
        if response.status().as_u16() == 403 {
            tracing::warn!("⚠️ GitHub API rate limit reached. Configure a token to raise it.");
        }
        Ok(response)
    }

    /// Fetches the account's repositories, most recently updated first, one
    /// page of up to 100.
    pub async fn list_repositories(&self) -> Result<Vec<Repository>> {
        let endpoint = format!("users/{}/repos?per_page=100&sort=updated", self.account);
        let response = self.get(&endpoint).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioError::FetchError {
                status: status.as_u16(),
                endpoint,
            });
        }

        let repos: Vec<Repository> = response.json().await?;
        tracing::debug!("Fetched {} repositories for {}", repos.len(), self.account);
        Ok(repos)
    }

    /// Best-effort enrichment for one repository. Every failure degrades to
    /// the empty shape, so a broken repository never blocks its siblings.
    pub async fn repo_details(&self, repo: &str) -> RepoDetails {
        let languages = match self.languages(repo).await {
            Ok(languages) => languages,
            Err(e) => {
                tracing::warn!("⚠️ Language lookup failed for {}: {}", repo, e);
                Vec::new()
            }
        };
        let dependencies = match self.manifest_keywords(repo).await {
            Ok(keywords) => keywords,
            Err(e) => {
                tracing::warn!("⚠️ Manifest lookup failed for {}: {}", repo, e);
                Vec::new()
            }
        };
        RepoDetails {
            languages,
            dependencies,
        }
    }

    /// Language names from the byte-count breakdown, alphabetical. A repo
    /// without a detected language answers with an empty object; any
    /// non-success status is treated the same way.
    async fn languages(&self, repo: &str) -> Result<Vec<String>> {
        let endpoint = format!("repos/{}/{}/languages", self.account, repo);
        let response = self.get(&endpoint).await?;
        if !response.status().is_success() {
            return Ok(Vec::new());
        }
        let breakdown: BTreeMap<String, u64> = response.json().await?;
        Ok(breakdown.into_keys().collect())
    }

    /// Keyword list from `package.json`, with `project-info.json` as the
    /// fallback for repositories that carry no Node manifest. Missing both is
    /// normal and yields no keywords.
    async fn manifest_keywords(&self, repo: &str) -> Result<Vec<String>> {
        for filename in ["package.json", "project-info.json"] {
            let endpoint = format!("repos/{}/{}/contents/{}", self.account, repo, filename);
            let response = self.get(&endpoint).await?;
            if !response.status().is_success() {
                continue;
            }
            let contents: ContentsResponse = response.json().await?;
            let manifest: Manifest = serde_json::from_slice(&decode_content(&contents.content)?)?;
            return Ok(manifest.keywords.unwrap_or_default());
        }
        Ok(Vec::new())
    }
}

/// The contents API base64-encodes file bodies with embedded line breaks;
/// strip whitespace before decoding.
fn decode_content(content: &str) -> Result<Vec<u8>> {
    let compact: String = content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(base64::engine::general_purpose::STANDARD.decode(compact)?)
}
