use std::fs::File;
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result, write_err};

const PREFIX: &str = ".";
const SUFFIX: &str = ".part";

#[cfg(unix)]
const DEFAULT_MODE: u32 = 0o666;

/// A file being written next to its final destination.
///
/// The temp file lives in the destination's own directory so that
/// [`publish`](Self::publish) is a single same-volume rename. Dropping a
/// `PendingFile` without publishing deletes it.
#[derive(Debug)]
pub struct PendingFile {
    inner: NamedTempFile,
}

impl PendingFile {
    /// Create a uniquely named temp file inside `dir`.
    ///
    /// On unix the file is opened with mode `0o666`, so the process umask
    /// decides the final bits the same way `File::create` would.
    pub fn new_in(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut builder = tempfile::Builder::new();
        builder.prefix(PREFIX).suffix(SUFFIX);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(DEFAULT_MODE));
        }
        let inner = builder.tempfile_in(dir).map_err(write_err(dir))?;
        Ok(Self { inner })
    }

    /// Create a temp file in the directory that will hold `destination`.
    pub fn for_destination(destination: impl AsRef<Path>) -> Result<Self> {
        let destination = destination.as_ref();
        let parent = destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| Error::NoParent(destination.to_path_buf()))?;
        Self::new_in(parent)
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    pub fn as_file(&self) -> &File {
        self.inner.as_file()
    }

    /// A second handle to the same file, for async writers.
    pub fn reopen(&self) -> Result<File> {
        self.inner.reopen().map_err(write_err(self.path()))
    }

    pub fn sync(&self) -> Result<()> {
        self.inner.as_file().sync_all().map_err(write_err(self.path()))
    }

    /// Set the permission bits the published file will carry.
    pub fn set_permissions(&self, permissions: std::fs::Permissions) -> Result<()> {
        self.inner
            .as_file()
            .set_permissions(permissions)
            .map_err(write_err(self.path()))
    }

    /// Rename into `destination`, replacing whatever is there.
    ///
    /// A file already at `destination` passes its permissions on to the
    /// replacement. On failure the temp file is removed before the error is
    /// returned.
    pub fn publish(self, destination: impl AsRef<Path>) -> Result<PathBuf> {
        let destination = destination.as_ref().to_path_buf();
        let existing = std::fs::metadata(&destination).ok().filter(|m| m.is_file());
        if let Some(existing) = existing {
            self.set_permissions(existing.permissions())?;
        }
        self.inner
            .persist(&destination)
            .map_err(|e| Error::Persist {
                path: destination.clone(),
                source: e.error,
            })?;
        Ok(destination)
    }

    /// Close and delete, reporting a failed removal.
    pub fn discard(self) -> Result<()> {
        let path = self.path().to_path_buf();
        self.inner.close().map_err(write_err(path))
    }
}

impl Write for PendingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Seek for PendingFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entries(dir: &Path) -> Vec<PathBuf> {
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect()
    }

    #[test]
    fn pending_file_is_created_in_the_given_dir() {
        let dir = tempdir().unwrap();
        let pending = PendingFile::new_in(dir.path()).unwrap();
        assert_eq!(pending.path().parent(), Some(dir.path()));
        let name = pending.path().file_name().unwrap().to_string_lossy();
        assert!(name.starts_with('.'));
        assert!(name.ends_with(".part"));
    }

    #[test]
    fn publish_moves_content_into_place() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("out.bin");

        let mut pending = PendingFile::for_destination(&dest).unwrap();
        pending.write_all(b"payload").unwrap();
        let published = pending.publish(&dest).unwrap();

        assert_eq!(published, dest);
        assert_eq!(std::fs::read(&dest).unwrap(), b"payload");
        assert_eq!(entries(dir.path()), vec![dest]);
    }

    #[test]
    fn drop_removes_temp_file() {
        let dir = tempdir().unwrap();
        {
            let mut pending = PendingFile::new_in(dir.path()).unwrap();
            pending.write_all(b"half").unwrap();
            assert_eq!(entries(dir.path()).len(), 1);
        }
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn discard_removes_temp_file() {
        let dir = tempdir().unwrap();
        let pending = PendingFile::new_in(dir.path()).unwrap();
        pending.discard().unwrap();
        assert!(entries(dir.path()).is_empty());
    }

    #[test]
    fn publish_replaces_existing_destination() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("config.json");
        std::fs::write(&dest, "old").unwrap();

        let mut pending = PendingFile::for_destination(&dest).unwrap();
        pending.write_all(b"new").unwrap();
        pending.publish(&dest).unwrap();

        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "new");
    }

    #[cfg(unix)]
    fn mode(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        std::fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn publish_keeps_mode_of_replaced_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let dest = dir.path().join("run.sh");
        std::fs::write(&dest, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&dest, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut pending = PendingFile::for_destination(&dest).unwrap();
        pending.write_all(b"#!/bin/sh\necho new\n").unwrap();
        pending.publish(&dest).unwrap();

        assert_eq!(mode(&dest), 0o755);
    }

    #[cfg(unix)]
    #[test]
    fn new_file_is_not_owner_only() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("fresh.txt");
        let reference = dir.path().join("reference.txt");
        std::fs::File::create(&reference).unwrap();

        let mut pending = PendingFile::for_destination(&dest).unwrap();
        pending.write_all(b"hello").unwrap();
        pending.publish(&dest).unwrap();

        assert_eq!(mode(&dest), mode(&reference));
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempdir().unwrap();
        let err = PendingFile::new_in(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
