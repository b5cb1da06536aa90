use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result, read_err, write_err};
use crate::primitives::pending::PendingFile;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";

#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Write `content` through a same-directory temp file and rename it over `path`.
pub fn atomic_write(path: impl AsRef<Path>, content: &[u8]) -> Result<PathBuf> {
    let path = hutil_platform::path::expand(path)?;
    let mut pending = PendingFile::for_destination(&path)?;
    pending.write_all(content).map_err(write_err(pending.path()))?;
    pending.sync()?;
    pending.publish(&path)
}

pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = hutil_platform::path::expand(path)?;
    std::fs::read_to_string(&path).map_err(read_err(path))
}

pub fn write_text(text: &str, path: impl AsRef<Path>) -> Result<PathBuf> {
    atomic_write(path, text.as_bytes())
}

pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(read_text(path)?.lines().map(str::to_owned).collect())
}

/// Join with the platform line separator; no trailing separator is added.
pub fn write_lines<S: AsRef<str>>(lines: &[S], path: impl AsRef<Path>) -> Result<PathBuf> {
    let joined = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(LINE_ENDING);
    write_text(&joined, path)
}

pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = hutil_platform::path::expand(path)?;
    let bytes = std::fs::read(&path).map_err(read_err(&path))?;
    serde_json::from_slice(&bytes).map_err(|source| Error::Json { path, source })
}

pub fn save_json<T: Serialize + ?Sized>(value: &T, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = hutil_platform::path::expand(path)?;
    let bytes = serde_json::to_vec(value).map_err(|source| Error::Json {
        path: path.clone(),
        source,
    })?;
    atomic_write(&path, &bytes)
}
