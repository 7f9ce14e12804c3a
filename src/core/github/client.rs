use super::models::{ApiErrorBody, BranchEntry, CommitDetails, RepositoryInfo};
use crate::config::GitHubConfig;
use crate::core::model::{BranchRecord, RepositoryId};
use crate::core::remote::{RemoteClient, RemoteRepository};
use crate::utils::{CleanerError, Result};
use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const API_VERSION: &str = "2022-11-28";
pub const BRANCHES_PER_PAGE: usize = 100;
const USER_AGENT: &str = concat!("repo-cleaner/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the GitHub REST API.
pub struct GitHubClient {
    http: Client,
    api_url: Url,
}

impl GitHubClient {
    pub fn new(settings: &GitHubConfig, token: &str) -> Result<Self> {
        let api_url = parse_api_url(&settings.api_url)?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            CleanerError::config_error("GitHub token contains characters not allowed in a header")
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self { http, api_url })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn repository_info(&self, full_name: &str) -> Result<RepositoryInfo> {
        let url = self.endpoint(repo_segments(full_name))?;
        self.get_json(url)
    }

    /// Walks `/branches` page by page until a short page comes back.
    pub fn list_branches(&self, full_name: &str) -> Result<Vec<BranchEntry>> {
        let mut branches = Vec::new();
        let mut page = 1usize;

        loop {
            let mut url = self.endpoint(repo_segments(full_name).chain(["branches"]))?;
            url.query_pairs_mut()
                .append_pair("per_page", &BRANCHES_PER_PAGE.to_string())
                .append_pair("page", &page.to_string());

            let batch: Vec<BranchEntry> = self.get_json(url)?;
            let received = batch.len();
            branches.extend(batch);

            if received < BRANCHES_PER_PAGE {
                break;
            }
            page += 1;
        }

        tracing::debug!(repository = full_name, count = branches.len(), "listed branches");
        Ok(branches)
    }

    pub fn commit(&self, full_name: &str, sha: &str) -> Result<CommitDetails> {
        let url = self.endpoint(repo_segments(full_name).chain(["commits", sha]))?;
        self.get_json(url)
    }

    /// Deletes `refs/heads/<branch>`. Slashes in the branch name stay path separators.
    pub fn delete_branch_ref(&self, full_name: &str, branch: &str) -> Result<()> {
        let url = self.endpoint(branch_ref_segments(full_name, branch))?;
        tracing::debug!(%url, "DELETE");
        self.send(self.http.delete(url))?;
        Ok(())
    }

    fn endpoint<'s>(&self, segments: impl IntoIterator<Item = &'s str>) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                CleanerError::config_error(format!(
                    "GitHub API URL '{}' cannot be used as a base URL",
                    self.api_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self.send(self.http.get(url))?;
        Ok(response.json()?)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send()?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(CleanerError::api(status.as_u16(), api_error_message(status, &body)))
    }
}

impl RemoteClient for GitHubClient {
    fn repository(&self, id: &RepositoryId) -> Result<Box<dyn RemoteRepository + '_>> {
        let info = self
            .repository_info(id.as_str())
            .map_err(|e| CleanerError::repository_access(id.as_str(), e.to_string()))?;

        tracing::debug!(
            repository = %info.full_name,
            default_branch = info.default_branch.as_deref().unwrap_or("?"),
            "resolved repository"
        );

        Ok(Box::new(GitHubRepository {
            client: self,
            full_name: info.full_name,
        }))
    }
}

pub struct GitHubRepository<'a> {
    client: &'a GitHubClient,
    full_name: String,
}

impl GitHubRepository<'_> {
    fn tip_commit_date(&self, branch: &BranchEntry) -> Result<DateTime<Utc>> {
        let details = self.client.commit(&self.full_name, &branch.commit.sha)?;
        details.committer_date().ok_or_else(|| {
            CleanerError::repository_access(
                &self.full_name,
                format!(
                    "commit {} at the tip of '{}' has no committer date",
                    details.sha, branch.name
                ),
            )
        })
    }
}

impl RemoteRepository for GitHubRepository<'_> {
    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn branches(&self) -> Result<Vec<BranchRecord>> {
        self.client
            .list_branches(&self.full_name)?
            .into_iter()
            .map(|branch| {
                let last_commit = self.tip_commit_date(&branch)?;
                Ok(BranchRecord::new(branch.name, last_commit))
            })
            .collect()
    }

    fn delete_branch(&self, branch: &str) -> Result<()> {
        self.client.delete_branch_ref(&self.full_name, branch)
    }
}

fn parse_api_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| CleanerError::config_error(format!("Invalid GitHub API URL '{raw}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(CleanerError::config_error(format!(
            "GitHub API URL '{raw}' must be an http(s) URL"
        )));
    }

    Ok(url)
}

fn repo_segments(full_name: &str) -> impl Iterator<Item = &str> {
    ["repos"].into_iter().chain(full_name.split('/'))
}

fn branch_ref_segments<'s>(full_name: &'s str, branch: &'s str) -> impl Iterator<Item = &'s str> {
    repo_segments(full_name)
        .chain(["git", "refs", "heads"])
        .chain(branch.split('/'))
}

fn api_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        })
}
