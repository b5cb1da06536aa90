use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// Summary of a completed extraction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractReport {
    pub entry_count: usize,
    pub total_bytes: u64,
    /// Paths relative to the extraction directory.
    pub entries: Vec<PathBuf>,
}

/// Unzip `archive` into `destination`, creating directories as needed.
///
/// Every entry name is checked before anything is written: names that are
/// absolute or climb out with `..` fail with [`Error::UnsafePath`].
pub fn extract(archive: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<ExtractReport> {
    let archive_path = hutil_platform::path::expand(archive)?;
    let destination = hutil_platform::path::expand(destination)?;

    let file = File::open(&archive_path).map_err(Error::access(&archive_path))?;
    let format_err = |source: zip::result::ZipError| Error::Format {
        path: archive_path.clone(),
        source,
    };
    let mut zip = ZipArchive::new(file).map_err(format_err)?;

    let mut plan = Vec::with_capacity(zip.len());
    for i in 0..zip.len() {
        let entry = zip.by_index_raw(i).map_err(format_err)?;
        let relative = entry.enclosed_name().ok_or_else(|| Error::UnsafePath {
            entry: entry.name().to_owned(),
        })?;
        plan.push(relative);
    }

    debug!(
        archive = %archive_path.display(),
        destination = %destination.display(),
        entries = plan.len(),
        "extracting"
    );

    let mut report = ExtractReport::default();
    for (i, relative) in plan.into_iter().enumerate() {
        let mut entry = zip.by_index(i).map_err(format_err)?;
        let target = destination.join(&relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&target).map_err(Error::access(&target))?;
            continue;
        }
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(Error::access(parent))?;
        }
        let mut out = File::create(&target).map_err(Error::access(&target))?;
        let mut source = EntryReader::new(&mut entry);
        let written = match io::copy(&mut source, &mut out) {
            Ok(n) => n,
            Err(e) => {
                drop(out);
                let _ = std::fs::remove_file(&target);
                return Err(if source.failed {
                    format_err(zip::result::ZipError::Io(e))
                } else {
                    Error::FileAccess {
                        path: target,
                        source: e,
                    }
                });
            }
        };
        report.total_bytes += written;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&target, std::fs::Permissions::from_mode(mode & 0o777))
                .map_err(Error::access(&target))?;
        }

        report.entry_count += 1;
        report.entries.push(relative);
    }
    Ok(report)
}

/// Remembers whether a copy failed while reading the entry, so corrupt data
/// is told apart from a failing write.
struct EntryReader<R> {
    inner: R,
    failed: bool,
}

impl<R: Read> EntryReader<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            failed: false,
        }
    }
}

impl<R: Read> Read for EntryReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf).inspect_err(|_| self.failed = true)
    }
}
