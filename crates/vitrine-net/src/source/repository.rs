//! Remote repository listing source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_core::logging::targets;

use super::ListDataSource;
use crate::error::Result;
use crate::http::HttpClient;

/// How many repositories a listing keeps by default.
pub const DEFAULT_REPOSITORY_LIMIT: usize = 6;

const GITHUB_API: &str = "https://api.github.com";

/// One record from a public repository listing.
///
/// Unknown fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name.
    pub name: String,
    /// Free-text description; many repositories have none.
    #[serde(default)]
    pub description: Option<String>,
    /// Topic tags in the order the API returns them.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Browser URL of the repository.
    pub html_url: String,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Primary language, when detected.
    #[serde(default)]
    pub language: Option<String>,
    /// Project homepage or live demo.
    #[serde(default)]
    pub homepage: Option<String>,
}

impl Repository {
    /// The description, or a placeholder for repositories without one.
    pub fn description_or_default(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => "No description available",
        }
    }

    /// Whether the repository carries `topic` (case-insensitive).
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t.eq_ignore_ascii_case(topic))
    }

    /// A non-empty homepage link.
    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|h| !h.trim().is_empty())
    }
}

/// Sort repositories by `updated_at`, newest first, and keep at most `limit`.
///
/// Repositories updated at the same instant keep their listing order.
pub fn newest_first(mut repositories: Vec<Repository>, limit: usize) -> Vec<Repository> {
    repositories.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    repositories.truncate(limit);
    repositories
}

/// Loads a repository listing over HTTP.
#[derive(Debug, Clone)]
pub struct RepositorySource {
    client: HttpClient,
    endpoint: String,
    limit: usize,
}

impl RepositorySource {
    /// A source for an arbitrary listing endpoint.
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            limit: DEFAULT_REPOSITORY_LIMIT,
        }
    }

    /// A source for a GitHub user's public repositories.
    pub fn github_user(client: HttpClient, user: &str) -> Self {
        Self::new(client, format!("{GITHUB_API}/users/{user}/repos"))
    }

    /// Keep at most `limit` repositories.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The listing endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Maximum number of repositories returned.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl ListDataSource for RepositorySource {
    type Item = Repository;

    #[tracing::instrument(skip(self), target = "vitrine::net", fields(endpoint = %self.endpoint))]
    async fn load(&self) -> Result<Vec<Repository>> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/vnd.github+json")
            .query("per_page", "100")
            .send()
            .await
            .inspect_err(|err| tracing::warn!(target: targets::NET, %err, "repository listing request failed"))?;

        let repositories: Vec<Repository> = response.error_for_status().await?.json().await?;
        let fetched = repositories.len();
        let repositories = newest_first(repositories, self.limit);
        tracing::debug!(
            target: targets::NET,
            fetched,
            kept = repositories.len(),
            "loaded repository listing"
        );
        Ok(repositories)
    }
}
