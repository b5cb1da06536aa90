use std::path::{Path, PathBuf};

use crate::entry::ArchiveEntry;
use crate::error::{Error, Result};

/// Collect every regular file below `root`, named relative to `base`.
///
/// Uses an explicit stack. With `sorted`, children are pushed in reverse
/// name order so they pop in name order, giving a pre-order walk keyed on
/// name; otherwise `read_dir` order is kept. Symlinked directories below
/// `root` are not descended into; symlinked files are read through.
pub fn walk(root: &Path, base: &Path, sorted: bool) -> Result<Vec<ArchiveEntry>> {
    let mut entries = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        let linked = path != root
            && std::fs::symlink_metadata(&path)
                .map_err(Error::access(&path))?
                .is_symlink();
        let meta = std::fs::metadata(&path).map_err(Error::access(&path))?;
        if meta.is_dir() {
            if linked {
                continue;
            }
            let mut children = read_children(&path)?;
            if sorted {
                children.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
            } else {
                children.reverse();
            }
            stack.extend(children);
        } else if meta.is_file() {
            entries.push(ArchiveEntry::relative_to(path, base));
        }
    }
    Ok(entries)
}

fn read_children(dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::read_dir(dir)
        .map_err(Error::access(dir))?
        .map(|entry| entry.map(|e| e.path()).map_err(Error::access(dir)))
        .collect()
}
