use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use hutil_fs::PendingFile;
use tracing::debug;
use zip::ZipWriter;

use crate::entry::ArchiveEntry;
use crate::error::{Error, Result};
use crate::options::ArchiveOptions;
use crate::walk::walk;

/// Zip `sources` (files and directories) into `destination`.
///
/// With `deterministic`, entries from all sources are ordered by comparing
/// names component by component, the order a name-sorted pre-order walk
/// yields.
///
/// The archive is built in a temp file beside `destination` and renamed
/// into place only once complete, so `destination` is either the full
/// archive or untouched.
pub fn archive<P: AsRef<Path>>(
    sources: &[P],
    destination: impl AsRef<Path>,
    options: ArchiveOptions,
) -> Result<PathBuf> {
    let mut entries = Vec::new();
    for source in sources {
        let source = hutil_platform::path::expand(source)?;
        entries.extend(collect(&source, options.deterministic)?);
    }
    if options.deterministic {
        entries.sort_by(|a, b| a.name.split('/').cmp(b.name.split('/')));
        reject_duplicates(&entries)?;
    }
    write_archive(&entries, destination, options)
}

/// Zip a list of files and directories.
pub fn archive_files<P: AsRef<Path>>(
    files: &[P],
    destination: impl AsRef<Path>,
    deterministic: bool,
) -> Result<PathBuf> {
    archive(files, destination, ArchiveOptions::new().deterministic(deterministic))
}

/// Zip the contents of `dir` into `<destination parent>/<destination stem>.zip`.
///
/// Entry names are relative to `dir`, without its own name as a prefix.
pub fn archive_dir(dir: impl AsRef<Path>, destination: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = hutil_platform::path::expand(dir)?;
    let destination = hutil_platform::path::expand(destination)?;
    let stem = destination
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "archive".into());
    let mut file_name = stem;
    file_name.push(".zip");
    let target = destination.with_file_name(file_name);

    let entries = walk(&dir, &dir, false)?;
    write_archive(&entries, target, ArchiveOptions::default())
}

fn collect(source: &Path, sorted: bool) -> Result<Vec<ArchiveEntry>> {
    let meta = std::fs::metadata(source).map_err(Error::access(source))?;
    if meta.is_dir() {
        let base = source.parent().unwrap_or(source);
        return walk(source, base, sorted);
    }
    let name = source.file_name().ok_or_else(|| Error::FileAccess {
        path: source.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "source has no file name"),
    })?;
    Ok(vec![ArchiveEntry::new(source, name.to_string_lossy())])
}

fn reject_duplicates(sorted: &[ArchiveEntry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(sorted.len());
    for entry in sorted {
        if !seen.insert(entry.name.as_str()) {
            return Err(Error::DuplicateEntry {
                name: entry.name.clone(),
            });
        }
    }
    Ok(())
}

fn write_archive(
    entries: &[ArchiveEntry],
    destination: impl AsRef<Path>,
    options: ArchiveOptions,
) -> Result<PathBuf> {
    let destination = hutil_platform::path::expand(destination)?;
    debug!(
        destination = %destination.display(),
        entries = entries.len(),
        deterministic = options.deterministic,
        platform = hutil_platform::current().name(),
        "writing archive"
    );

    let pending = PendingFile::for_destination(&destination)?;
    let mut zip = ZipWriter::new(pending);
    for entry in entries {
        let metadata = entry.metadata(options.deterministic)?;
        zip.start_file(entry.name.as_str(), metadata.file_options())?;
        let mut file = File::open(&entry.source).map_err(Error::access(&entry.source))?;
        io::copy(&mut file, &mut zip).map_err(Error::access(&entry.source))?;
    }
    let mut pending = zip.finish()?;
    pending.flush()?;
    pending.sync()?;

    let published = pending.publish(&destination)?;
    debug!(path = %published.display(), "archive published");
    Ok(published)
}
