//! Error types for hutil-fetch.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("timed out waiting for data from {url}")]
    Timeout { url: String },

    #[error("no filename could be resolved for {url}")]
    FilenameUnresolved { url: String },

    #[error("not a release asset URL: {0}")]
    MalformedUrl(String),

    #[error("not a OneDrive share link: {0}")]
    InvalidShareUrl(String),

    #[error("release {tag} has no asset named '{asset}'")]
    AssetNotFound { asset: String, tag: String },

    #[error("invalid release metadata: {0}")]
    InvalidMetadata(String),

    #[error("I/O error on '{path}': {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Fs(#[from] hutil_fs::Error),

    #[error(transparent)]
    Platform(#[from] hutil_platform::Error),
}

impl FetchError {
    pub(crate) fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
