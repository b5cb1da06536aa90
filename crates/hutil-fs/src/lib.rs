//! Same-directory staging and atomic publish, plus the small filesystem
//! helpers the rest of the workspace leans on.
//!
//! Every path-taking function runs its input through
//! [`hutil_platform::path::expand`] first, so `~/notes.txt` and relative paths
//! are accepted everywhere.

mod error;
mod primitives;

pub use error::{Error, Result};
pub use primitives::pending::PendingFile;
pub use primitives::rw::{
    atomic_write, read_json, read_lines, read_text, save_json, write_lines, write_text,
};
pub use primitives::tree::{apply_dir, copy, is_hidden, mv, remove_all, rename, visible_glob};
