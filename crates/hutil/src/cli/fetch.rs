use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use hutil::fetch::providers::github::DEFAULT_API_BASE;
use hutil::fetch::{
    FetchOptions, Fetcher, GitHubReleases, ReqwestClient, ResolvedDownload, ShareLink, Timeouts,
};

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected 'Name: value', got '{raw}'"))?;
    Ok((name.trim().to_owned(), value.trim().to_owned()))
}

/// Destination and transport settings shared by the download commands.
#[derive(Clone, Debug, Args)]
pub struct FetchArg {
    /// File path, or an existing directory to name the file from the response
    #[arg(default_value = ".")]
    pub dest: PathBuf,
    /// Extra request header, `Name: value`
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,
    /// Connect timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub connect_timeout: u64,
    /// Per-chunk read timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub read_timeout: u64,
}

impl FetchArg {
    fn fetcher(&self) -> Result<Fetcher<ReqwestClient>> {
        let timeouts = Timeouts {
            connect: Duration::from_secs(self.connect_timeout),
            read: Duration::from_secs(self.read_timeout),
        };
        let client = ReqwestClient::with_timeouts(&timeouts)?;
        let mut options = FetchOptions::default().timeouts(timeouts);
        options.headers = self.headers.clone();
        Ok(Fetcher::with_options(client, options))
    }

    async fn fetch(&self, resolved: &ResolvedDownload) -> Result<()> {
        let path = self
            .fetcher()?
            .download_resolved(resolved, &self.dest)
            .await
            .with_context(|| format!("failed to download {}", resolved.url))?;
        println!("{}", path.display());
        Ok(())
    }
}

#[derive(Clone, Debug, Args)]
pub struct DownloadArg {
    pub url: String,
    #[command(flatten)]
    pub fetch: FetchArg,
}

impl DownloadArg {
    pub async fn run(self) -> Result<()> {
        self.fetch.fetch(&ResolvedDownload::new(&self.url)).await
    }
}

#[derive(Clone, Debug, Args)]
pub struct GhReleaseArg {
    /// `https://github.com/<owner>/<repo>/releases/download/<tag>/<file>`
    pub url: String,
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,
    /// API root, for GitHub Enterprise
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api: String,
    #[command(flatten)]
    pub fetch: FetchArg,
}

impl GhReleaseArg {
    pub async fn run(self) -> Result<()> {
        let client = ReqwestClient::new()?;
        let resolved = GitHubReleases::new(client, &self.token)
            .with_api_base(&self.api)
            .resolve(&self.url)
            .await
            .with_context(|| format!("failed to resolve {}", self.url))?;
        self.fetch.fetch(&resolved).await
    }
}

#[derive(Clone, Debug, Args)]
pub struct OneDriveArg {
    /// `https://1drv.ms/u/s!<id>?e=<key>`
    pub url: String,
    #[command(flatten)]
    pub fetch: FetchArg,
}

impl OneDriveArg {
    pub async fn run(self) -> Result<()> {
        let link = ShareLink::parse(&self.url)?;
        self.fetch.fetch(&ResolvedDownload::new(link.content_url())).await
    }
}
