use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{Datelike, Local, Timelike};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime};

use crate::error::{Error, Result};

const DETERMINISTIC_LEVEL: i64 = 9;

/// A regular file and the name it is stored under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub source: PathBuf,
    /// `/`-separated, never absolute.
    pub name: String,
}

/// Per-entry header fields written to the archive.
#[derive(Clone, Copy, Debug)]
pub struct EntryMetadata {
    pub modified: DateTime,
    pub unix_mode: Option<u32>,
    pub compression: CompressionMethod,
    pub level: Option<i64>,
}

/// 2019-01-01T00:00:00, the timestamp of every deterministic entry.
pub fn fixed_timestamp() -> DateTime {
    DateTime::from_date_and_time(2019, 1, 1, 0, 0, 0).unwrap_or_default()
}

impl ArchiveEntry {
    pub fn new(source: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
        }
    }

    /// Build an entry named by its path relative to `base`.
    pub(crate) fn relative_to(source: PathBuf, base: &Path) -> Self {
        let name = source
            .strip_prefix(base)
            .unwrap_or(&source)
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        Self { source, name }
    }

    pub fn metadata(&self, deterministic: bool) -> Result<EntryMetadata> {
        let meta = std::fs::metadata(&self.source).map_err(Error::access(&self.source))?;
        if deterministic {
            let executable = hutil_platform::current().is_executable(&self.source, &meta);
            Ok(EntryMetadata {
                modified: fixed_timestamp(),
                unix_mode: Some(hutil_platform::current().archive_mode(executable)),
                compression: CompressionMethod::Deflated,
                level: Some(DETERMINISTIC_LEVEL),
            })
        } else {
            Ok(EntryMetadata {
                modified: modified_time(&meta),
                unix_mode: None,
                compression: CompressionMethod::Deflated,
                level: None,
            })
        }
    }
}

impl EntryMetadata {
    pub fn file_options(&self) -> SimpleFileOptions {
        let options = SimpleFileOptions::default()
            .compression_method(self.compression)
            .compression_level(self.level)
            .last_modified_time(self.modified);
        match self.unix_mode {
            Some(mode) => options.unix_permissions(mode),
            None => options,
        }
    }
}

/// Local mtime, or the zip epoch when it does not fit the DOS range.
fn modified_time(meta: &Metadata) -> DateTime {
    let Ok(modified) = meta.modified() else {
        return DateTime::default();
    };
    to_zip_time(modified)
}

fn to_zip_time(time: SystemTime) -> DateTime {
    let local: chrono::DateTime<Local> = time.into();
    let (Ok(year), Ok(month), Ok(day), Ok(hour), Ok(minute), Ok(second)) = (
        u16::try_from(local.year()),
        u8::try_from(local.month()),
        u8::try_from(local.day()),
        u8::try_from(local.hour()),
        u8::try_from(local.minute()),
        u8::try_from(local.second()),
    ) else {
        return DateTime::default();
    };
    DateTime::from_date_and_time(year, month, day, hour, minute, second).unwrap_or_default()
}
