//! Path normalization shared by every path-taking operation.

use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

/// User's home directory.
pub fn user_home() -> Option<PathBuf> {
    home::home_dir()
}

/// Expand a leading `~` and make the path absolute.
///
/// Relative paths are resolved against the current directory. Symlinks are
/// not resolved and the path does not need to exist.
pub fn expand(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    let expanded = expand_home(path)?;
    Ok(std::path::absolute(&expanded)?)
}

fn expand_home(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = user_home().ok_or_else(|| Error::NoHome {
                path: path.to_path_buf(),
            })?;
            Ok(home.join(components.as_path()))
        }
        _ => Ok(path.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_makes_relative_absolute() {
        let expanded = expand("some/relative/file.txt").unwrap();
        assert!(expanded.is_absolute());
        assert!(expanded.ends_with("some/relative/file.txt"));
    }

    #[test]
    fn expand_keeps_absolute() {
        let base = std::env::temp_dir().join("hutil-abs");
        assert_eq!(expand(&base).unwrap(), base);
    }

    #[test]
    fn expand_tilde() {
        let Some(home) = user_home() else { return };
        assert_eq!(expand("~").unwrap(), home);
        assert_eq!(expand("~/notes.txt").unwrap(), home.join("notes.txt"));
    }

    #[test]
    fn tilde_inside_name_is_literal() {
        let expanded = expand("dir/~backup").unwrap();
        assert!(expanded.ends_with("dir/~backup"));
    }
}
