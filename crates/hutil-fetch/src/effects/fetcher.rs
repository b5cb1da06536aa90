use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use hutil_fs::PendingFile;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::core::resolve_filename;
use crate::data::{DownloadTarget, FetchOptions, ResolvedDownload};
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Streams a URL into a temp file beside the destination and publishes it
/// by rename once the body is complete and a filename is known.
pub struct Fetcher<C: HttpClient> {
    client: C,
    options: FetchOptions,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C) -> Self {
        Self::with_options(client, FetchOptions::default())
    }

    pub fn with_options(client: C, options: FetchOptions) -> Self {
        Self { client, options }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Download `url` to `destination`.
    ///
    /// An existing directory receives the file under the name given by
    /// `Content-Disposition`; anything else is taken as the file path. On
    /// any error the destination is left exactly as it was.
    pub async fn download(
        &self,
        url: &str,
        destination: impl AsRef<Path>,
        headers: &[(String, String)],
    ) -> Result<PathBuf> {
        self.fetch(url, destination.as_ref(), headers, None).await
    }

    /// Download a provider-resolved request, using its filename hint when
    /// the server sends none.
    pub async fn download_resolved(
        &self,
        resolved: &ResolvedDownload,
        destination: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        self.fetch(
            &resolved.url,
            destination.as_ref(),
            &resolved.headers,
            resolved.filename.as_deref(),
        )
        .await
    }

    async fn fetch(
        &self,
        url: &str,
        destination: &Path,
        headers: &[(String, String)],
        hint: Option<&str>,
    ) -> Result<PathBuf> {
        let target = DownloadTarget::from_path(destination)?;
        let pending = PendingFile::new_in(target.dir())?;
        debug!(url, staging = %pending.path().display(), "download started");

        match self.fill(url, headers, &pending).await {
            Ok(response_headers) => publish(url, &target, pending, &response_headers, hint),
            Err(e) => {
                warn!(url, error = %e, "download failed, dropping staged file");
                Err(e)
            }
        }
    }

    /// Stream the body into `pending`, returning the response headers.
    async fn fill(
        &self,
        url: &str,
        headers: &[(String, String)],
        pending: &PendingFile,
    ) -> Result<Vec<(String, String)>> {
        let timeouts = self.options.timeouts;
        let mut all_headers = self.options.headers.clone();
        all_headers.extend_from_slice(headers);

        let response = tokio::time::timeout(
            timeouts.connect + timeouts.read,
            self.client.get(url, &all_headers),
        )
        .await
        .map_err(|_| FetchError::Timeout { url: url.to_owned() })?
        .map_err(FetchError::network)?;

        if !response.is_success() {
            return Err(FetchError::Network(format!(
                "{url} returned HTTP {}",
                response.status
            )));
        }

        let staging = pending.path().to_path_buf();
        let io_err = |source: std::io::Error| FetchError::Io {
            path: staging.clone(),
            source,
        };
        let mut file = tokio::fs::File::from_std(pending.reopen()?);
        let mut body = response.body;
        let mut received = 0u64;

        loop {
            let next = tokio::time::timeout(timeouts.read, body.next())
                .await
                .map_err(|_| FetchError::Timeout { url: url.to_owned() })?;
            let Some(chunk) = next else { break };
            let chunk = chunk.map_err(FetchError::network)?;
            file.write_all(&chunk).await.map_err(io_err)?;
            received += chunk.len() as u64;
        }
        file.flush().await.map_err(io_err)?;

        debug!(url, bytes = received, "body received");
        Ok(response.headers)
    }
}

fn publish(
    url: &str,
    target: &DownloadTarget,
    pending: PendingFile,
    response_headers: &[(String, String)],
    hint: Option<&str>,
) -> Result<PathBuf> {
    let destination = match target {
        DownloadTarget::File { dir, name } => dir.join(name),
        DownloadTarget::Directory(dir) => match resolve_filename(response_headers, hint) {
            Some(name) => dir.join(name),
            None => {
                warn!(url, "no filename in response or resolver, dropping staged file");
                return Err(FetchError::FilenameUnresolved { url: url.to_owned() });
            }
        },
    };
    debug!(url, path = %destination.display(), "filename resolved");

    pending.sync()?;
    let published = pending.publish(&destination)?;
    debug!(url, path = %published.display(), "download published");
    Ok(published)
}
