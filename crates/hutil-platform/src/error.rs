use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot expand '{path}': home directory is unknown")]
    NoHome { path: PathBuf },

    #[error("failed to inspect '{path}': {source}")]
    Metadata { path: PathBuf, source: std::io::Error },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
