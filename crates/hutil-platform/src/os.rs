//! Per-OS file capabilities.
//!
//! Hidden-file detection and executable detection differ between operating
//! systems. Each OS gets one [`Platform`] implementation; the one matching the
//! host is picked once on first use and handed out by [`current`].

use std::fs::Metadata;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::{Error, Result};

/// Stored mode for entries whose source is executable: `r-xr-xr-x`.
pub const MODE_EXECUTABLE: u32 = 0o555;

/// Stored mode for every other entry: `r--r--r--`.
pub const MODE_READ_ONLY: u32 = 0o444;

pub trait Platform: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Whether the file at `path` is hidden by the platform's conventions.
    fn is_hidden(&self, path: &Path) -> Result<bool>;

    /// Whether the owner may execute the file described by `metadata`.
    fn is_executable(&self, path: &Path, metadata: &Metadata) -> bool;

    /// Permission word stored for an archive entry.
    fn archive_mode(&self, executable: bool) -> u32 {
        if executable { MODE_EXECUTABLE } else { MODE_READ_ONLY }
    }
}

fn has_dot_name(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

fn metadata(path: &Path) -> Result<Metadata> {
    std::fs::metadata(path).map_err(|source| Error::Metadata {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Unix;

impl Platform for Unix {
    fn name(&self) -> &'static str {
        "unix"
    }

    fn is_hidden(&self, path: &Path) -> Result<bool> {
        Ok(has_dot_name(path))
    }

    #[cfg(unix)]
    fn is_executable(&self, _path: &Path, metadata: &Metadata) -> bool {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o100 != 0
    }

    #[cfg(not(unix))]
    fn is_executable(&self, path: &Path, metadata: &Metadata) -> bool {
        Windows.is_executable(path, metadata)
    }
}

/// macOS also honours the Finder `UF_HIDDEN` flag.
#[derive(Debug, Default, Clone, Copy)]
pub struct Macos;

#[cfg(target_os = "macos")]
const UF_HIDDEN: u32 = 0x0000_8000;

impl Platform for Macos {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn is_hidden(&self, path: &Path) -> Result<bool> {
        if has_dot_name(path) {
            return Ok(true);
        }
        #[cfg(target_os = "macos")]
        {
            use std::os::macos::fs::MetadataExt;
            Ok(metadata(path)?.st_flags() & UF_HIDDEN != 0)
        }
        #[cfg(not(target_os = "macos"))]
        {
            metadata(path).map(|_| false)
        }
    }

    fn is_executable(&self, path: &Path, metadata: &Metadata) -> bool {
        Unix.is_executable(path, metadata)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Windows;

#[cfg(windows)]
const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "bat", "cmd", "com"];

impl Platform for Windows {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn is_hidden(&self, path: &Path) -> Result<bool> {
        #[cfg(windows)]
        {
            use std::os::windows::fs::MetadataExt;
            Ok(metadata(path)?.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
        }
        #[cfg(not(windows))]
        {
            metadata(path).map(|_| false)
        }
    }

    fn is_executable(&self, path: &Path, metadata: &Metadata) -> bool {
        metadata.is_file()
            && path
                .extension()
                .map(|ext| {
                    let ext = ext.to_string_lossy();
                    EXECUTABLE_EXTENSIONS
                        .iter()
                        .any(|known| ext.eq_ignore_ascii_case(known))
                })
                .unwrap_or(false)
    }
}

static CURRENT: Lazy<Box<dyn Platform>> = Lazy::new(detect);

fn detect() -> Box<dyn Platform> {
    if cfg!(target_os = "windows") {
        Box::new(Windows)
    } else if cfg!(target_os = "macos") {
        Box::new(Macos)
    } else {
        Box::new(Unix)
    }
}

/// The capability for the host operating system.
pub fn current() -> &'static dyn Platform {
    CURRENT.as_ref()
}
