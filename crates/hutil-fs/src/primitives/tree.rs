use std::path::{Path, PathBuf};

use crate::error::{Error, Result, read_err, write_err};

/// Delete a file or a whole directory tree. Missing paths are not an error.
pub fn remove_all(path: impl AsRef<Path>) -> Result<()> {
    let path = hutil_platform::path::expand(path)?;
    let meta = match std::fs::symlink_metadata(&path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(read_err(path)(e)),
    };
    if meta.is_dir() {
        std::fs::remove_dir_all(&path).map_err(write_err(path))
    } else {
        std::fs::remove_file(&path).map_err(write_err(path))
    }
}

fn into_dir_if_exists(src: &Path, dst: PathBuf) -> PathBuf {
    match (dst.is_dir(), src.file_name()) {
        (true, Some(name)) => dst.join(name),
        _ => dst,
    }
}

/// Copy a file. A directory `dst` receives the file under its own name.
pub fn copy(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<PathBuf> {
    let src = hutil_platform::path::expand(src)?;
    let dst = into_dir_if_exists(&src, hutil_platform::path::expand(dst)?);
    std::fs::copy(&src, &dst).map_err(write_err(&dst))?;
    Ok(dst)
}

/// Move a file or directory, falling back to copy + delete across volumes
/// for plain files.
pub fn mv(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<PathBuf> {
    let src = hutil_platform::path::expand(src)?;
    let dst = into_dir_if_exists(&src, hutil_platform::path::expand(dst)?);
    match std::fs::rename(&src, &dst) {
        Ok(()) => Ok(dst),
        Err(e) if e.kind() == std::io::ErrorKind::CrossesDevices && src.is_file() => {
            std::fs::copy(&src, &dst).map_err(write_err(&dst))?;
            std::fs::remove_file(&src).map_err(write_err(&src))?;
            Ok(dst)
        }
        Err(e) => Err(write_err(dst)(e)),
    }
}

/// Rename within the same directory. With `keep_extension` the original
/// extension is appended to `new_name`.
pub fn rename(path: impl AsRef<Path>, new_name: &str, keep_extension: bool) -> Result<PathBuf> {
    let path = hutil_platform::path::expand(path)?;
    let parent = path
        .parent()
        .ok_or_else(|| Error::NoParent(path.clone()))?;
    let file_name = match path.extension() {
        Some(ext) if keep_extension => format!("{new_name}.{}", ext.to_string_lossy()),
        _ => new_name.to_owned(),
    };
    let target = parent.join(file_name);
    std::fs::rename(&path, &target).map_err(write_err(&target))?;
    Ok(target)
}

fn is_dot_name(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Call `f` on every file under `dir`.
///
/// Dot-named entries are skipped. `suffix` is compared against the file's
/// extension including the dot (`".txt"`). Traversal uses an explicit stack.
pub fn apply_dir<F>(dir: impl AsRef<Path>, mut f: F, suffix: Option<&str>, recursive: bool) -> Result<()>
where
    F: FnMut(&Path),
{
    let root = hutil_platform::path::expand(dir)?;
    let mut pending = vec![root];

    while let Some(current) = pending.pop() {
        let entries = std::fs::read_dir(&current).map_err(read_err(&current))?;
        for entry in entries {
            let path = entry.map_err(read_err(&current))?.path();
            if is_dot_name(&path) {
                continue;
            }
            if path.is_dir() {
                if recursive {
                    pending.push(path);
                }
            } else if path.is_file() && matches_suffix(&path, suffix) {
                f(&path);
            }
        }
    }
    Ok(())
}

fn matches_suffix(path: &Path, suffix: Option<&str>) -> bool {
    let Some(suffix) = suffix else { return true };
    match path.extension() {
        Some(ext) => suffix.strip_prefix('.') == Some(&*ext.to_string_lossy()),
        None => suffix.is_empty(),
    }
}

/// Whether `path` is hidden on the host platform.
pub fn is_hidden(path: impl AsRef<Path>) -> Result<bool> {
    let path = hutil_platform::path::expand(path)?;
    Ok(hutil_platform::current().is_hidden(&path)?)
}

/// Glob below `dir`, dropping hidden matches.
pub fn visible_glob(dir: impl AsRef<Path>, pattern: &str) -> Result<Vec<PathBuf>> {
    let dir = hutil_platform::path::expand(dir)?;
    let full = dir.join(pattern).to_string_lossy().into_owned();
    let paths = glob::glob(&full).map_err(|source| Error::Pattern {
        pattern: full.clone(),
        source,
    })?;

    let platform = hutil_platform::current();
    Ok(paths
        .filter_map(|p| p.ok())
        .filter(|p| !platform.is_hidden(p).unwrap_or(false))
        .collect())
}
