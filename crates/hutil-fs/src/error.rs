use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read '{path}': {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to write '{path}': {source}")]
    Write { path: PathBuf, source: std::io::Error },

    #[error("failed to publish '{path}': {source}")]
    Persist { path: PathBuf, source: std::io::Error },

    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("'{0}' has no parent directory")]
    NoParent(PathBuf),

    #[error(transparent)]
    Platform(#[from] hutil_platform::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn read_err(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
    let path = path.into();
    move |source| Error::Read { path, source }
}

pub(crate) fn write_err(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
    let path = path.into();
    move |source| Error::Write { path, source }
}
