//! GitHub access: release listing and archive downloads
//!
//! Uses the blocking reqwest client with rustls. Requests are unauthenticated,
//! so the API rate limit is surfaced as its own error.

pub mod release;

use std::io::Read;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};

use crate::domain::{Asset, AssetConfig, AssetKind};
use crate::error::{self, ManagerError, Result};

pub use release::{Release, versions_from_releases};

/// Environment variable overriding the GitHub API base URL
pub const API_ENV: &str = "FRAYTOOLS_MANAGER_GITHUB_API";

pub const DEFAULT_API: &str = "https://api.github.com";

const RELEASES_PER_PAGE: u32 = 100;

/// Something that can list the releases of a source repository
pub trait ReleaseProvider {
    fn list_releases(&self, source: &AssetConfig) -> Result<Vec<Release>>;
}

/// An opened archive download
pub struct ArchiveStream {
    pub reader: Box<dyn Read>,
    /// Content length when the server reports one
    pub len: Option<u64>,
}

/// Something that can open a release archive URL for reading
pub trait ArchiveFetcher {
    fn fetch(&self, url: &str) -> Result<ArchiveStream>;
}

/// Fetch release metadata for a source and turn it into an [`Asset`]
pub fn fetch_asset(
    provider: &dyn ReleaseProvider,
    source: &AssetConfig,
    kind: AssetKind,
) -> Result<Asset> {
    let releases = provider.list_releases(source)?;
    Ok(Asset {
        id: source.id.clone(),
        owner: source.owner.clone(),
        repo: source.repo.clone(),
        versions: versions_from_releases(&releases, kind),
    })
}

/// Blocking GitHub client
pub struct GitHubClient {
    client: Client,
    api_base: String,
}

impl GitHubClient {
    pub fn new(api_base: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("fraytools-manager/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(600))
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        })
    }

    /// Client for `FRAYTOOLS_MANAGER_GITHUB_API` or the public API
    pub fn from_env() -> Result<Self> {
        let base = std::env::var(API_ENV).unwrap_or_else(|_| DEFAULT_API.to_string());
        Self::new(base)
    }

    fn releases_url(&self, source: &AssetConfig) -> String {
        format!(
            "{}/repos/{}/{}/releases?per_page={RELEASES_PER_PAGE}",
            self.api_base, source.owner, source.repo
        )
    }
}

impl ReleaseProvider for GitHubClient {
    fn list_releases(&self, source: &AssetConfig) -> Result<Vec<Release>> {
        let url = self.releases_url(source);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .map_err(|e| error::github::fetch_failed(&source.id, e))?;

        if is_rate_limited(&response) {
            return Err(ManagerError::RateLimited);
        }
        if !response.status().is_success() {
            return Err(error::github::fetch_failed(
                &source.id,
                format!("{} returned {}", source.repository(), response.status()),
            ));
        }

        let body = response
            .text()
            .map_err(|e| error::github::fetch_failed(&source.id, e))?;
        serde_json::from_str(&body).map_err(|e| error::github::fetch_failed(&source.id, e))
    }
}

impl ArchiveFetcher for GitHubClient {
    fn fetch(&self, url: &str) -> Result<ArchiveStream> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| error::github::download_failed(url, e))?;

        if is_rate_limited(&response) {
            return Err(ManagerError::RateLimited);
        }
        if !response.status().is_success() {
            return Err(error::github::download_failed(
                url,
                format!("server returned {}", response.status()),
            ));
        }

        let len = response.content_length();
        Ok(ArchiveStream {
            reader: Box::new(response),
            len,
        })
    }
}

fn is_rate_limited(response: &Response) -> bool {
    let status = response.status();
    if status != StatusCode::FORBIDDEN && status != StatusCode::TOO_MANY_REQUESTS {
        return false;
    }
    response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|remaining| remaining.trim() == "0")
}
