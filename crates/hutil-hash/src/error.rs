use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HashError {
    #[error("failed to read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("unsupported algorithm: {0}")]
    Unsupported(String),

    #[error(transparent)]
    Platform(#[from] hutil_platform::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, HashError>;
