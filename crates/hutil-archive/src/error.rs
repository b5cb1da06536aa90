use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot access '{path}': {source}")]
    FileAccess { path: PathBuf, source: io::Error },

    #[error("'{path}' is not a readable zip archive: {source}")]
    Format {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("entry '{entry}' escapes the extraction directory")]
    UnsafePath { entry: String },

    #[error("two sources map to the same archive entry '{name}'")]
    DuplicateEntry { name: String },

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Fs(#[from] hutil_fs::Error),

    #[error(transparent)]
    Platform(#[from] hutil_platform::Error),
}

impl Error {
    pub(crate) fn access(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::FileAccess { path, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
