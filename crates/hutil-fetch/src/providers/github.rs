//! Private GitHub release assets, fetched through the REST API.

use futures_util::StreamExt;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::data::ResolvedDownload;
use crate::effects::HttpClient;
use crate::error::{FetchError, Result};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

static RELEASE_ASSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https://([^/\s?#]+)/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)/releases/download/([^/?#\s]+)/([^/?#\s]+)$",
    )
    .expect("release asset pattern is valid")
});

/// `https://<host>/<owner>/<repo>/releases/download/<tag>/<file>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseAssetUrl {
    pub host: String,
    pub owner: String,
    pub repo: String,
    pub tag: String,
    pub file: String,
}

impl ReleaseAssetUrl {
    pub fn parse(url: &str) -> Result<Self> {
        let caps = RELEASE_ASSET
            .captures(url)
            .ok_or_else(|| FetchError::MalformedUrl(url.to_owned()))?;
        Ok(Self {
            host: caps[1].to_owned(),
            owner: caps[2].to_owned(),
            repo: caps[3].to_owned(),
            tag: caps[4].to_owned(),
            file: caps[5].to_owned(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct Release {
    assets: Vec<Asset>,
}

#[derive(Debug, Deserialize)]
struct Asset {
    id: u64,
    name: String,
}

/// Resolves release download URLs to authenticated asset API requests.
pub struct GitHubReleases<C: HttpClient> {
    client: C,
    token: String,
    api_base: String,
}

impl<C: HttpClient> GitHubReleases<C> {
    pub fn new(client: C, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
            api_base: DEFAULT_API_BASE.to_owned(),
        }
    }

    /// Point at a different API root, e.g. GitHub Enterprise or a test server.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_owned();
        self
    }

    /// Look up the asset named by `url` in its release.
    pub async fn resolve(&self, url: &str) -> Result<ResolvedDownload> {
        let asset_url = ReleaseAssetUrl::parse(url)?;
        let ReleaseAssetUrl {
            owner, repo, tag, file, ..
        } = &asset_url;

        let release_url = format!("{}/repos/{owner}/{repo}/releases/tags/{tag}", self.api_base);
        debug!(url = %release_url, "fetching release metadata");

        let authorization = format!("Bearer {}", self.token);
        let headers = [
            ("Authorization".to_owned(), authorization.clone()),
            ("Accept".to_owned(), "application/vnd.github+json".to_owned()),
        ];
        let response = self
            .client
            .get(&release_url, &headers)
            .await
            .map_err(FetchError::network)?;
        if !response.is_success() {
            return Err(FetchError::Network(format!(
                "{release_url} returned HTTP {}",
                response.status
            )));
        }

        let mut body = Vec::new();
        let mut stream = response.body;
        while let Some(chunk) = stream.next().await {
            body.extend_from_slice(&chunk.map_err(FetchError::network)?);
        }

        let release: Release = serde_json::from_slice(&body)
            .map_err(|e| FetchError::InvalidMetadata(e.to_string()))?;
        let asset = release
            .assets
            .iter()
            .find(|a| &a.name == file)
            .ok_or_else(|| FetchError::AssetNotFound {
                asset: file.clone(),
                tag: tag.clone(),
            })?;

        Ok(
            ResolvedDownload::new(format!(
                "{}/repos/{owner}/{repo}/releases/assets/{}",
                self.api_base, asset.id
            ))
            .header("Authorization", authorization)
            .header("Accept", "application/octet-stream")
            .filename(file.clone()),
        )
    }
}
