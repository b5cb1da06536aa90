//! Immutable configuration and request types.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{FetchError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    /// Longest wait for any single body chunk.
    pub read: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(30),
            read: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Sent with every request, before per-call headers.
    pub headers: Vec<(String, String)>,
    pub timeouts: Timeouts,
}

impl FetchOptions {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }
}

/// Where a download lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadTarget {
    /// An explicit file path.
    File { dir: PathBuf, name: OsString },
    /// An existing directory; the filename comes from the response.
    Directory(PathBuf),
}

impl DownloadTarget {
    /// Expand `path` and classify it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = hutil_platform::path::expand(path)?;
        if path.is_dir() {
            return Ok(Self::Directory(path));
        }
        match (path.parent(), path.file_name()) {
            (Some(dir), Some(name)) => Ok(Self::File {
                dir: dir.to_path_buf(),
                name: name.to_os_string(),
            }),
            _ => Err(FetchError::Io {
                path,
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "destination has no parent directory",
                ),
            }),
        }
    }

    pub fn dir(&self) -> &Path {
        match self {
            Self::File { dir, .. } => dir,
            Self::Directory(dir) => dir,
        }
    }
}

/// A download request produced by a provider resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedDownload {
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Used when a directory target gets no `Content-Disposition` filename.
    pub filename: Option<String>,
}

impl ResolvedDownload {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn filename(mut self, name: impl Into<String>) -> Self {
        self.filename = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_timeouts() {
        let t = Timeouts::default();
        assert_eq!(t.connect, Duration::from_secs(30));
        assert_eq!(t.read, Duration::from_secs(60));
    }

    #[test]
    fn existing_directory_is_directory_target() {
        let dir = tempdir().unwrap();
        let target = DownloadTarget::from_path(dir.path()).unwrap();
        assert_eq!(target, DownloadTarget::Directory(dir.path().to_path_buf()));
    }

    #[test]
    fn file_path_splits_into_dir_and_name() {
        let dir = tempdir().unwrap();
        let target = DownloadTarget::from_path(dir.path().join("out.bin")).unwrap();
        assert_eq!(
            target,
            DownloadTarget::File {
                dir: dir.path().to_path_buf(),
                name: "out.bin".into(),
            }
        );
        assert_eq!(target.dir(), dir.path());
    }
}
